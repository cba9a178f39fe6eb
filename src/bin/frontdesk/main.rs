use anyhow::Result;
use clap::Parser;

mod cli;
mod render;

mod cmd_checkin;
mod cmd_checkout;
mod cmd_init;
mod cmd_list;
mod cmd_search;
mod cmd_sort;
mod cmd_stats;

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = cli::Cli::parse();
    match cli.cmd {
        cli::Cmd::Init { path } => cmd_init::exec(path),

        cli::Cmd::CheckIn {
            path,
            room,
            name,
            id_card,
            phone,
            address,
        } => cmd_checkin::exec(path, room, name, id_card, phone, address),

        cli::Cmd::CheckOut { path, room, yes } => cmd_checkout::exec(path, room, yes),

        cli::Cmd::Search {
            path,
            room,
            name,
            id_card,
        } => cmd_search::exec(path, room, name, id_card),

        cli::Cmd::Stats { path, json } => cmd_stats::exec(path, json),

        cli::Cmd::Sort { path, by } => cmd_sort::exec(path, by),

        cli::Cmd::List {
            path,
            available,
            kind,
            json,
        } => cmd_list::exec(path, available, kind, json),
    }
}
