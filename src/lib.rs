// Copyright (C) 2014-2015 Mickaël Salaün
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Lesser General Public License as published by
// the Free Software Foundation, version 3 of the License.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Lesser General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Read the mounted filesystem table (*/proc/mounts*) as `MountRecord`s
//!
//! The table is opened again for every query, so each call sees the mounts
//! active at that time.
//!
//! ```no_run
//! use procmounts::{find, Criteria};
//!
//! for mount in find(Criteria::new().fstype("ext4"))? {
//!     println!("{}", mount?);
//! }
//! # Ok::<(), procmounts::TableError>(())
//! ```

pub use self::error::*;
pub use self::parse::*;

mod error;
mod parse;
