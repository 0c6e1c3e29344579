use std::io;

use chess_core::session::Session;
use chess_core::{RulesConfig, SlideRule};

fn parse_rule(arg: &str) -> Option<SlideRule> {
    match arg {
        "stop" => Some(SlideRule::StopAtBlocker),
        "sweep" => Some(SlideRule::SweepToEdge),
        "sweep-short" => Some(SlideRule::SweepShort),
        _ => None,
    }
}

fn main() -> io::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::init();

    let mut config = RulesConfig::default();
    if let Some(arg) = std::env::args().nth(1) {
        match parse_rule(&arg) {
            Some(rule) => config.slide_rule = rule,
            None => {
                eprintln!("unknown slide rule '{arg}', expected stop, sweep or sweep-short");
                std::process::exit(2);
            }
        }
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    Session::new(config).run(stdin.lock(), &mut stdout)
}
