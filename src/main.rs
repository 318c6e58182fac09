use bitmaprle::{compress, expand, DEFAULT_FIELD_WIDTH};
use std::io::{self, BufReader, BufWriter};
use std::{env, process};

fn usage() -> ! {
    eprintln!("usage: bitmaprle -|+ [WIDTH]");
    eprintln!("  -        compress stdin to stdout");
    eprintln!("  +        expand stdin to stdout");
    eprintln!(
        "  WIDTH    run-length field width in bits, default {}",
        DEFAULT_FIELD_WIDTH
    );
    process::exit(2);
}

fn main() {
    pretty_env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (direction, width) = match args.as_slice() {
        [d] => (d.as_str(), DEFAULT_FIELD_WIDTH),
        [d, w] => match w.parse::<u8>() {
            Ok(w) => (d.as_str(), w),
            Err(_) => usage(),
        },
        _ => usage(),
    };

    let input = BufReader::new(io::stdin().lock());
    let output = BufWriter::new(io::stdout().lock());
    let result = match direction {
        "-" => compress(width, input, output),
        "+" => expand(width, input, output),
        _ => usage(),
    };

    if let Err(e) = result {
        eprintln!("bitmaprle: {e}");
        process::exit(1);
    }
}
