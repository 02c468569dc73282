use nulltrace_tailwind::tailwind::parser;
use nulltrace_tailwind::{Config, DesignPreset, Engine, PresetOverrides, TwError};
use std::env;
use std::fs;
use std::process;

struct Options {
    config: Option<String>,
    preset: Option<String>,
    markup: Option<String>,
    explain: bool,
    classes: Vec<String>,
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Some(options) => options,
        None => {
            print_usage();
            process::exit(1);
        }
    };

    let (config, preset) = match load_settings(&options) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("✗ failed to load settings:");
            print_error(&e);
            process::exit(1);
        }
    };
    let engine = Engine::new(config, &preset);

    let mut input = options.classes.join(" ");
    if let Some(path) = &options.markup {
        match fs::read_to_string(path) {
            Ok(markup) => {
                for value in parser::class_attributes(&markup) {
                    input.push(' ');
                    input.push_str(value);
                }
            }
            Err(e) => {
                eprintln!("✗ failed to read {}: {}", path, e);
                process::exit(1);
            }
        }
    }

    if options.explain {
        let mut unresolved = 0;
        for token in parser::tokenize(&input) {
            let report = engine.resolve_token(token);
            if report.is_resolved() {
                println!("✓ {}", report);
            } else {
                println!("✗ {}", report);
                unresolved += 1;
            }
        }
        process::exit(if unresolved == 0 { 0 } else { 2 });
    }

    let (doc, report) = engine.resolve_with_report(&input);
    match doc.to_yaml() {
        Ok(yaml) => print!("{}", yaml),
        Err(e) => {
            eprintln!("✗ failed to serialize document:");
            print_error(&e);
            process::exit(1);
        }
    }
    for token in &report.dropped {
        eprintln!("✗ dropped {}", token);
    }
    eprintln!("{} resolved, {} dropped", report.resolved, report.dropped.len());
}

fn parse_args(args: &[String]) -> Option<Options> {
    let mut options = Options {
        config: None,
        preset: None,
        markup: None,
        explain: false,
        classes: Vec::new(),
    };
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => options.config = Some(iter.next()?.clone()),
            "--preset" => options.preset = Some(iter.next()?.clone()),
            "--markup" => options.markup = Some(iter.next()?.clone()),
            "--explain" => options.explain = true,
            "-h" | "--help" => return None,
            _ => options.classes.push(arg.clone()),
        }
    }
    if options.classes.is_empty() && options.markup.is_none() {
        return None;
    }
    Some(options)
}

fn load_settings(options: &Options) -> Result<(Config, DesignPreset), TwError> {
    let config = match &options.config {
        Some(path) => Config::from_yaml(&read(path)?)?,
        None => Config::default(),
    };
    let preset = match &options.preset {
        Some(path) => DesignPreset::tailwind().with_overrides(&PresetOverrides::from_yaml(&read(path)?)?)?,
        None => DesignPreset::tailwind(),
    };
    Ok((config, preset))
}

fn read(path: &str) -> Result<String, TwError> {
    fs::read_to_string(path)
        .map_err(|e| TwError::InvalidConfig(format!("Failed to read {}: {}", path, e)))
}

fn print_usage() {
    eprintln!("Usage: tw-resolve [--config FILE] [--preset FILE] [--markup FILE] [--explain] <classes>...");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  tw-resolve \"p-4 hover:bg-blue-500 md:text-lg\"");
    eprintln!("  tw-resolve --explain flex -mt-2 text-red-500/50");
    eprintln!("  tw-resolve --config demos/config.yaml --markup demos/card.html");
}

fn print_error(error: &TwError) {
    match error {
        TwError::InvalidConfig(msg) => {
            eprintln!("  Invalid config:");
            eprintln!("    {}", msg);
        }
        TwError::InvalidPreset { key, reason } => {
            eprintln!("  Invalid preset entry '{}':", key);
            eprintln!("    {}", reason);
        }
        TwError::InvalidColor { value, reason } => {
            eprintln!("  Invalid color value '{}':", value);
            eprintln!("    {}", reason);
        }
        TwError::Yaml(msg) => {
            eprintln!("  YAML error:");
            eprintln!("    {}", msg);
        }
        other => eprintln!("  {}", other),
    }
}
