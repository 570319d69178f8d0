// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    caltime_cli::run()
}
