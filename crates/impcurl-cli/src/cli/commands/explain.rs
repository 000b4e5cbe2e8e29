//! `impcurl explain <code>` – describe a curl exit code.

use impcurl_core::exit_code;

pub fn run_explain(code: i32) {
    println!("{}: {}", code, exit_code::description(code));
}
