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

use crate::error::{LineError, TableError};
use log::{debug, trace};
use std::borrow::Cow;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::iter::{Enumerate, FusedIterator};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const PROC_MOUNTS: &str = "/proc/mounts";

/// One line of the mount table
///
/// Fields are kept verbatim: no octal unescaping and no option parsing.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct MountRecord {
    pub device: String,
    pub path: String,
    pub fstype: String,
    pub options: String,
}

impl FromStr for MountRecord {
    type Err = LineError;

    fn from_str(line: &str) -> Result<MountRecord, LineError> {
        // The dump and pass fields, if any, are left in the iterator.
        let mut tokens = line.split(' ');
        Ok(MountRecord {
            device: tokens.next().ok_or(LineError::MissingDevice)?.to_string(),
            path: tokens.next().ok_or(LineError::MissingPath)?.to_string(),
            fstype: tokens.next().ok_or(LineError::MissingFstype)?.to_string(),
            options: tokens.next().ok_or(LineError::MissingOptions)?.to_string(),
        })
    }
}

/// Parse one mount table line, already stripped of its line terminator
pub fn parse_line(line: &str) -> Result<MountRecord, LineError> {
    line.parse()
}

impl MountRecord {
    /// Raw comma-separated option tokens, e.g. `rw`, `relatime`, `mode=755`
    pub fn options_iter(&self) -> impl Iterator<Item = &str> {
        self.options.split_terminator(',')
    }

    /// The mount point with the kernel's `\NNN` octal escapes decoded
    pub fn decoded_path(&self) -> Cow<'_, str> {
        unescape(&self.path)
    }

    /// The mounted source with the kernel's `\NNN` octal escapes decoded
    pub fn decoded_device(&self) -> Cow<'_, str> {
        unescape(&self.device)
    }
}

impl fmt::Display for MountRecord {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        write!(out, "<ProcMount {}={} ({}, {})>", self.path, self.device, self.fstype, self.options)
    }
}

fn octal_byte(digits: &[u8]) -> Option<u8> {
    if !digits.iter().all(|d| (b'0'..=b'7').contains(d)) {
        return None;
    }
    u8::from_str_radix(std::str::from_utf8(digits).ok()?, 8).ok()
}

// Invalid sequences are kept as is.
fn unescape(field: &str) -> Cow<'_, str> {
    if !field.contains('\\') {
        return Cow::Borrowed(field);
    }
    let bytes = field.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' {
            if let Some(byte) = bytes.get(i + 1..i + 4).and_then(octal_byte) {
                out.push(byte);
                i += 4;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    Cow::Owned(String::from_utf8_lossy(&out).into_owned())
}

/// Exact-match criteria, combined with a logical AND
///
/// Unset criteria match anything, so `Criteria::new()` matches every record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Criteria {
    device: Option<String>,
    path: Option<String>,
    fstype: Option<String>,
}

impl Criteria {
    pub fn new() -> Criteria {
        Criteria::default()
    }

    pub fn device<T>(mut self, device: T) -> Criteria where T: Into<String> {
        self.device = Some(device.into());
        self
    }

    pub fn path<T>(mut self, path: T) -> Criteria where T: Into<String> {
        self.path = Some(path.into());
        self
    }

    pub fn fstype<T>(mut self, fstype: T) -> Criteria where T: Into<String> {
        self.fstype = Some(fstype.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.device.is_none() && self.path.is_none() && self.fstype.is_none()
    }

    pub fn matches(&self, m: &MountRecord) -> bool {
        fn field(criterion: &Option<String>, value: &str) -> bool {
            criterion.as_ref().map_or(true, |c| c == value)
        }
        field(&self.device, &m.device)
            && field(&self.path, &m.path)
            && field(&self.fstype, &m.fstype)
    }
}

/// Lazy sequence of records read from a mount table
///
/// The reader is owned by the iterator and released when it is dropped. The
/// first error ends the sequence.
pub struct Mounts<T> {
    lines: Enumerate<Lines<T>>,
    criteria: Criteria,
    done: bool,
}

impl<T> Mounts<T> where T: BufRead {
    pub fn new(mtab: T) -> Mounts<T> {
        Mounts::with_criteria(mtab, Criteria::new())
    }

    pub fn with_criteria(mtab: T, criteria: Criteria) -> Mounts<T> {
        Mounts {
            lines: mtab.lines().enumerate(),
            criteria,
            done: false,
        }
    }
}

impl<T> Iterator for Mounts<T> where T: BufRead {
    type Item = Result<MountRecord, TableError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let (nb, line) = match self.lines.next() {
                Some(next) => next,
                None => {
                    self.done = true;
                    return None;
                }
            };
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    self.done = true;
                    return Some(Err(TableError::Read(e)));
                }
            };
            match parse_line(line.trim()) {
                Ok(m) => {
                    if self.criteria.matches(&m) {
                        return Some(Ok(m));
                    }
                }
                Err(e) => {
                    trace!("Rejecting line {}: {:?}", nb + 1, line);
                    self.done = true;
                    return Some(Err(TableError::Line { line: nb + 1, source: e }));
                }
            }
        }
    }
}

impl<T> FusedIterator for Mounts<T> where T: BufRead {}

/// A mount table file, re-read on every query
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MountTable {
    path: PathBuf,
}

impl Default for MountTable {
    fn default() -> MountTable {
        MountTable::new(PROC_MOUNTS)
    }
}

impl MountTable {
    pub fn new<T>(path: T) -> MountTable where T: AsRef<Path> {
        MountTable {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Result<BufReader<File>, TableError> {
        debug!("Opening mount table {}", self.path.display());
        let file = File::open(&self.path).map_err(|source| TableError::Open {
            path: self.path.clone(),
            source,
        })?;
        Ok(BufReader::new(file))
    }

    /// Every record of the table, in file order
    pub fn list_all(&self) -> Result<Mounts<BufReader<File>>, TableError> {
        Ok(list_all_from(self.open()?))
    }

    /// The records matching all the set `criteria`, in file order
    pub fn find(&self, criteria: Criteria) -> Result<Mounts<BufReader<File>>, TableError> {
        Ok(find_from(criteria, self.open()?))
    }
}

/// Get all the records using a custom `BufRead`
pub fn list_all_from<T>(mtab: T) -> Mounts<T> where T: BufRead {
    Mounts::new(mtab)
}

/// Get all the records using */proc/mounts*
pub fn list_all() -> Result<Mounts<BufReader<File>>, TableError> {
    MountTable::default().list_all()
}

/// Get the records which match the `criteria` using a custom `BufRead`
pub fn find_from<T>(criteria: Criteria, mtab: T) -> Mounts<T> where T: BufRead {
    Mounts::with_criteria(mtab, criteria)
}

/// Get the records which match the `criteria` using */proc/mounts*
pub fn find(criteria: Criteria) -> Result<Mounts<BufReader<File>>, TableError> {
    MountTable::default().find(criteria)
}
