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

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to read or parse a whole mount table
#[derive(Debug, Error)]
pub enum TableError {
    #[error("Failed to open the mount table {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read the mount table: {0}")]
    Read(#[from] io::Error),
    /// `line` starts at 1
    #[error("Failed at line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: LineError,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("Line parsing: Missing field #1 (device)")]
    MissingDevice,
    #[error("Line parsing: Missing field #2 (path)")]
    MissingPath,
    #[error("Line parsing: Missing field #3 (fstype)")]
    MissingFstype,
    #[error("Line parsing: Missing field #4 (options)")]
    MissingOptions,
}
