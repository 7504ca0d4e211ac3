use std::env;
use std::io::{stdin, stdout, Write};
use std::path::Path;

use crossterm::style::Stylize;

use syllabify_core::dictionary::{Dictionary, Entry};
use syllabify_core::scoring::wcm;
use syllabify_core::{destress, persistence, pretty, syllabify, Phoneme, Syllable};

const DEFAULT_DICTIONARY_PATH: &str = "cmudict.0.7a";

fn main() {
    let dict_path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DICTIONARY_PATH.to_string());
    let dictionary = match persistence::load_or_parse(Path::new(&dict_path)) {
        Ok(dict) => {
            println!("Loaded {} entries from '{}'.", dict.len(), dict_path);
            Some(dict)
        }
        Err(e) => {
            eprintln!(
                "[WARN] No dictionary at '{}' ({}). Raw ARPABET input only.",
                dict_path, e
            );
            None
        }
    };

    println!("ARPABET Syllabifier. Enter a word or a phoneme string. 'exit' to quit.");
    println!("Commands: ':alaska on|off' toggles the lax-vowel rule, ':j INPUT' prints JSON.");
    println!("---------------------------------------------------------------");

    let mut alaska_rule = true;
    loop {
        print!("> ");
        stdout().flush().unwrap();

        let mut input = String::new();
        if stdin().read_line(&mut input).unwrap() == 0 {
            break; // EOF
        }
        let cmd = input.trim();

        match cmd {
            "exit" => break,
            "" => continue,
            s if s.starts_with(":alaska") => {
                match s.trim_start_matches(":alaska").trim() {
                    "on" => {
                        alaska_rule = true;
                        println!("Alaska rule on.");
                    }
                    "off" => {
                        alaska_rule = false;
                        println!("Alaska rule off.");
                    }
                    _ => println!("Usage: :alaska on|off"),
                }
            }
            s if s.starts_with(":j") && s.len() > 2 => {
                // JSON mode prints nothing to stdout but the JSON line.
                let (pron, _) = resolve(s[2..].trim(), dictionary.as_ref());
                match syllabify(&pron, alaska_rule) {
                    Ok(syls) => println!(
                        "{}",
                        serde_json::to_string(&syls).unwrap_or_else(|_| "[]".to_string())
                    ),
                    Err(e) => println!("{} {}", "[ERROR]".red(), e),
                }
            }
            s => {
                let (pron, hit) = resolve(s, dictionary.as_ref());
                if let Some(entry) = hit {
                    println!("{}  {}", entry.word, entry.pron.join(" "));
                }
                print_analysis(&pron, alaska_rule);
            }
        }
    }
}

/// A dictionary hit on the uppercased input wins, with the matched entry
/// handed back so the caller decides whether to echo it; anything else is
/// treated as a raw phoneme string, uppercased so "m eh1 n y uw0" works too.
fn resolve<'a>(
    line: &str,
    dictionary: Option<&'a Dictionary>,
) -> (Vec<Phoneme>, Option<&'a Entry>) {
    if let Some(dict) = dictionary {
        if let Some(entry) = dict.lookup(&line.to_uppercase()) {
            return (entry.pron.clone(), Some(entry));
        }
    }
    let raw: Vec<Phoneme> = line.split_whitespace().map(|p| p.to_uppercase()).collect();
    (raw, None)
}

fn print_analysis(pron: &[Phoneme], alaska_rule: bool) {
    match syllabify(pron, alaska_rule) {
        Ok(syls) => {
            let styled: Vec<String> = syls.iter().map(styled_syllable).collect();
            println!("Syllables:  {}", styled.join(" . "));
            println!("Pretty:     {}", pretty(&syls));
            println!("Destressed: {}", pretty(&destress(&syls)));
            if let Ok(score) = wcm(pron) {
                println!("WCM score:  {}", score);
            }
        }
        Err(e) => println!("{} {}", "[ERROR]".red(), e),
    }
}

/// Onset and coda in cyan around a bold yellow nucleus; empty slots vanish.
fn styled_syllable(syllable: &Syllable) -> String {
    let mut parts: Vec<String> = Vec::new();
    if !syllable.onset.is_empty() {
        parts.push(format!("{}", syllable.onset.join(" ").cyan()));
    }
    parts.push(format!("{}", syllable.nucleus.join(" ").yellow().bold()));
    if !syllable.coda.is_empty() {
        parts.push(format!("{}", syllable.coda.join(" ").cyan()));
    }
    parts.join(" ")
}
