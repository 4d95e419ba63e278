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

use procmounts::list_all;

fn list_mounts() {
    match list_all() {
        Ok(mounts) => {
            for mount in mounts {
                match mount {
                    Ok(m) => println!("* {}", m),
                    Err(e) => {
                        println!("Error: {}", e);
                        break;
                    }
                }
            }
        },
        Err(e) => println!("Error: {}", e),
    }
}

fn main() {
    env_logger::init();
    list_mounts();
}
