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

use procmounts::{Criteria, MountTable, PROC_MOUNTS};
use std::env::args;

const USAGE: &str = "Usage: find [--table FILE] [--device DEV] [--path PATH] [--fstype TYPE]";

fn parse_args() -> Result<(MountTable, Criteria), String> {
    let mut table = MountTable::new(PROC_MOUNTS);
    let mut criteria = Criteria::new();
    let mut args = args().skip(1);
    while let Some(flag) = args.next() {
        let value = args.next().ok_or_else(|| format!("Missing value for {}", flag))?;
        match flag.as_str() {
            "--table" => table = MountTable::new(value),
            "--device" => criteria = criteria.device(value),
            "--path" => criteria = criteria.path(value),
            "--fstype" => criteria = criteria.fstype(value),
            _ => return Err(format!("Unknown argument {}", flag)),
        }
    }
    Ok((table, criteria))
}

fn find_mounts(table: &MountTable, criteria: Criteria) {
    match table.find(criteria) {
        Ok(mounts) => {
            let mut found = 0;
            for mount in mounts {
                match mount {
                    Ok(m) => {
                        found += 1;
                        println!("* {}", m);
                    },
                    Err(e) => {
                        println!("Error: {}", e);
                        return;
                    }
                }
            }
            if found == 0 {
                println!("No mount point in {}", table.path().display());
            }
        },
        Err(e) => println!("Error: {}", e),
    }
}

fn main() {
    env_logger::init();
    match parse_args() {
        Ok((table, criteria)) => find_mounts(&table, criteria),
        Err(e) => {
            eprintln!("{}\n{}", e, USAGE);
            std::process::exit(2);
        }
    }
}
