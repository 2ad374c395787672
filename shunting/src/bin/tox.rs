use log::{debug, warn};

mod repl {
    use log::debug;
    use shunting::{validate, Error, ShuntingParser};

    // six decimals, same as printf's %f
    pub fn format_result(result: f64) -> String {
        format!("{:.6}", result)
    }

    pub fn evalexpr(input: &str) -> Result<(String, f64), Error> {
        validate(input)?;
        let rpn = ShuntingParser::parse_str(input)?;
        debug!("rpn: {:?}", rpn.0);
        let result = rpn.eval()?;
        Ok((rpn.to_string(), result))
    }
}

fn main() {
    let logger = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .env();
    if let Err(e) = logger.init() {
        eprintln!("Logger err: {}", e);
    }

    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        match repl::evalexpr(&input) {
            Ok((_, result)) => println!("{}", repl::format_result(result)),
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    use rustyline::error::ReadlineError;
    let mut rl = match rustyline::DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Readline err: {}", e);
            std::process::exit(1);
        }
    };
    let histpath = dirs::home_dir().map(|h| h.join(".tox_history"));
    if let Some(ref path) = histpath {
        if rl.load_history(path).is_err() {
            debug!("No history yet at {}", path.display());
        }
    }
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Readline err: {}", e);
                break;
            }
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                match repl::evalexpr(&line) {
                    Ok((expr, result)) => println!("{} = {}", expr, repl::format_result(result)),
                    Err(e) => println!("{}", e),
                }
            }
        }
    }
    if let Some(ref path) = histpath {
        if let Err(e) = rl.save_history(path) {
            warn!("Failed to save history to {}: {}", path.display(), e);
        }
    }
}
