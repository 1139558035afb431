mod cli;
mod commands;
mod logging;

use cli::{CheckParams, TypesParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("types", m)) => {
            let params = TypesParams::from_matches(m);
            logging::init(params.verbose);
            commands::types::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            logging::init(params.verbose);
            commands::check::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
