use std::env;
use std::fs;
use std::process;

use kalimba_tab::{parse_tab, to_note_sequence, LabelType, Settings};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut label_override: Option<LabelType> = None;
    let mut dump_tokens = false;
    let mut settings_path: Option<String> = None;
    let mut input_path: Option<String> = None;

    // Parse flags
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--letter" => label_override = Some(LabelType::Letter),
            "--number" => label_override = Some(LabelType::Number),
            "--tokens" => dump_tokens = true,
            "--settings" => match iter.next() {
                Some(path) => settings_path = Some(path.clone()),
                None => {
                    eprintln!("--settings requires a file path");
                    process::exit(1);
                }
            },
            _ => input_path = Some(arg.clone()),
        }
    }

    let input_path = match input_path {
        Some(path) => path,
        None => {
            eprintln!(
                "Usage: kalimba-tab [--letter|--number] [--tokens] [--settings <file.yaml>] <input.tab>"
            );
            process::exit(1);
        }
    };

    // Load settings (defaults when no file is given)
    let settings = match settings_path {
        Some(path) => {
            let document = match fs::read_to_string(&path) {
                Ok(document) => document,
                Err(e) => {
                    eprintln!("Error reading settings '{}': {}", path, e);
                    process::exit(1);
                }
            };
            match Settings::from_yaml(&document) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("{}", e);
                    process::exit(1);
                }
            }
        }
        None => Settings::default(),
    };

    let mut config = settings.parse_config();
    if let Some(label_type) = label_override {
        config.label_type = label_type;
    }

    // Read input file
    let content = match fs::read_to_string(&input_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", input_path, e);
            process::exit(1);
        }
    };

    let result = parse_tab(&content, &config);
    for warning in &result.warnings {
        eprintln!("warning: {}", warning);
    }

    if dump_tokens {
        match serde_yaml::to_string(&result.tokens) {
            Ok(yaml) => print!("{}", yaml),
            Err(e) => {
                eprintln!("Error serializing tokens: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    // One playback step per line; "." marks a silent step.
    for step in to_note_sequence(&result.tokens) {
        match step {
            Some(pitch) => println!("{}", pitch),
            None => println!("."),
        }
    }
}
