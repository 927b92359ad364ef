// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod achievements;
pub mod backup;
pub mod categories;
pub mod goals;
pub mod recurring;
pub mod settings;
pub mod stats;
pub mod tags;
pub mod templates;
pub mod transactions;
pub mod wallets;
pub mod wishes;
