//! Vela compiler front-end CLI.

use vela_diagnostic::ColorMode;
use vela_lexer::Dialect;

fn main() {
    velac::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        velac::print_usage();
        return;
    }

    match args[1].as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: vela lex <file.vela> [--dialect=ascii|extended] [--no-color]");
                std::process::exit(1);
            }

            let mut dialect = Dialect::Ascii;
            let mut color = ColorMode::Auto;
            let mut path: Option<&str> = None;

            for arg in args.iter().skip(2) {
                if let Some(name) = arg.strip_prefix("--dialect=") {
                    dialect = match name {
                        "ascii" => Dialect::Ascii,
                        "extended" => Dialect::Extended,
                        other => {
                            eprintln!("error: unknown dialect `{other}` (expected `ascii` or `extended`)");
                            std::process::exit(1);
                        }
                    };
                } else if arg == "--no-color" {
                    color = ColorMode::Never;
                } else if !arg.starts_with('-') && path.is_none() {
                    path = Some(arg.as_str());
                } else {
                    eprintln!("error: unrecognized argument `{arg}`");
                    std::process::exit(1);
                }
            }

            let Some(path) = path else {
                eprintln!("error: missing file path");
                std::process::exit(1);
            };

            std::process::exit(velac::lex_file(path, dialect, color));
        }
        "help" | "--help" | "-h" => velac::print_usage(),
        other => {
            eprintln!("error: unknown command `{other}`");
            velac::print_usage();
            std::process::exit(1);
        }
    }
}
