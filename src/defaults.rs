// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;

use crate::models::{
    Achievement, Budget, Category, Tag, Theme, TxKind, UnlockCondition, UserSettings, Wallet,
};

fn cat(id: &str, name: &str, kind: TxKind, icon: &str, color: &str) -> Category {
    Category {
        id: id.into(),
        name: name.into(),
        kind,
        icon: icon.into(),
        color: color.into(),
        is_default: true,
        budget_limit: None,
        sort_order: None,
    }
}

pub static DEFAULT_CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    use TxKind::*;
    vec![
        cat("exp-food", "Food & Dining", Expense, "UtensilsCrossed", "#ef4444"),
        cat("exp-transport", "Transport", Expense, "Car", "#f97316"),
        cat("exp-shopping", "Shopping", Expense, "ShoppingBag", "#eab308"),
        cat("exp-fun", "Entertainment", Expense, "Gamepad2", "#a855f7"),
        cat("exp-home", "Housing", Expense, "Home", "#3b82f6"),
        cat("exp-medical", "Health", Expense, "Heart", "#ec4899"),
        cat("exp-edu", "Education", Expense, "GraduationCap", "#14b8a6"),
        cat("exp-comm", "Phone & Internet", Expense, "Smartphone", "#6366f1"),
        cat("exp-other", "Other", Expense, "MoreHorizontal", "#6b7280"),
        cat("inc-salary", "Salary", Income, "Briefcase", "#22c55e"),
        cat("inc-part", "Side Job", Income, "Clock", "#10b981"),
        cat("inc-invest", "Investments", Income, "TrendingUp", "#06b6d4"),
        cat("inc-gift", "Gifts", Income, "Gift", "#f43f5e"),
        cat("inc-other", "Other", Income, "MoreHorizontal", "#6b7280"),
    ]
});

pub static DEFAULT_WALLETS: Lazy<Vec<Wallet>> = Lazy::new(|| {
    let w = |id: &str, name: &str, icon: &str, color: &str, def: bool, ord: u32| Wallet {
        id: id.into(),
        name: name.into(),
        icon: icon.into(),
        color: color.into(),
        balance: 0,
        is_default: def,
        sort_order: Some(ord),
    };
    vec![
        w("wallet-cash", "Cash", "Banknote", "#22c55e", true, 0),
        w("wallet-card", "Debit Card", "CreditCard", "#6366f1", false, 1),
        w("wallet-credit", "Credit Card", "Wallet", "#f97316", false, 2),
        w("wallet-savings", "Savings", "PiggyBank", "#1677ff", false, 3),
    ]
});

pub static DEFAULT_TAGS: Lazy<Vec<Tag>> = Lazy::new(|| {
    let t = |id: &str, name: &str, color: &str| Tag {
        id: id.into(),
        name: name.into(),
        color: color.into(),
    };
    vec![
        t("tag-reimburse", "Reimbursable", "#f97316"),
        t("tag-shared", "Shared", "#8b5cf6"),
        t("tag-essential", "Essential", "#22c55e"),
        t("tag-impulse", "Impulse", "#ef4444"),
    ]
});

pub fn default_settings() -> UserSettings {
    UserSettings {
        theme: Theme::Light,
        budget: Budget {
            monthly_limit: 0,
            category_budgets: Default::default(),
        },
        currency: "USD".into(),
        reminder_enabled: None,
        reminder_time: None,
    }
}

fn ach(id: &str, name: &str, description: &str, icon: &str, condition: UnlockCondition) -> Achievement {
    Achievement {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        icon: icon.into(),
        condition,
        unlocked_at: None,
    }
}

pub static ACHIEVEMENT_DEFINITIONS: Lazy<Vec<Achievement>> = Lazy::new(|| {
    use UnlockCondition::*;
    vec![
        ach("ach-first-record", "First Steps", "Record your first entry", "Pencil", TotalRecords(1)),
        ach("ach-7-days", "One Week In", "Record entries 7 days in a row", "Calendar", RecordStreak(7)),
        ach("ach-30-days", "Habit Formed", "Record entries 30 days in a row", "Trophy", RecordStreak(30)),
        ach("ach-100-records", "Century", "Record 100 entries in total", "Hash", TotalRecords(100)),
        ach("ach-save-1000", "Rainy Day Fund", "Save a total of 1,000 toward goals", "PiggyBank", TotalSaved(100_000)),
        ach("ach-save-10000", "Serious Saver", "Save a total of 10,000 toward goals", "Gem", TotalSaved(1_000_000)),
        ach("ach-goal-complete", "Goal Getter", "Complete your first savings goal", "Target", GoalsCompleted(1)),
        ach("ach-budget-ok", "Penny Wise", "Keep monthly spending within budget", "Shield", BudgetKept),
        ach("ach-checkin-7", "Check-in Rookie", "Check in 7 days in a row", "CheckCircle", CheckInStreak(7)),
        ach("ach-checkin-30", "Check-in Pro", "Check in 30 days in a row", "Award", CheckInStreak(30)),
    ]
});
