use std::io::{self, BufWriter};

use build_text_tools::cli::{init_logger, report_error, run_locale_lister, UsageStream};

fn main() {
    init_logger();
    let mut out = BufWriter::new(io::stdout().lock());
    let result = run_locale_lister(std::env::args_os(), &mut out);
    // flush whatever was produced before a failure
    drop(out);
    if let Err(e) = result {
        std::process::exit(report_error(&e, UsageStream::Stdout));
    }
}
