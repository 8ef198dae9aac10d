use std::io::{self, BufWriter};

use proconio::source::once::OnceSource;

fn main() {
    let mut source = OnceSource::new(io::stdin().lock());
    let mut out = BufWriter::new(io::stdout().lock());
    if let Err(e) = diff_checker::run(&mut source, &mut out) {
        eprintln!("diff-checker: {e}");
        std::process::exit(1);
    }
}
