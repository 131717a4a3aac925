// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! Documents are only ever written whole; there are no field-level updates.

pub mod documents;

pub use documents::write_document;
