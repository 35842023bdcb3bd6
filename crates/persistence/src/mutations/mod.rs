// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutations for the persistence layer.
//!
//! - `roots`: Writing user documents

pub mod roots;

pub use roots::store_root;
