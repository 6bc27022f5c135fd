// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity-Board interactive shell
//!
//! Terminal front end for the school activities signup service: loads the
//! activity list, then reads commands from stdin (signup, unregister,
//! refresh) and prints the re-rendered board after each one.

use activity_board::config::Config;
use activity_board::services::SignupClient;
use activity_board::status::StatusSlot;
use activity_board::view;
use activity_board::ActivityBoard;
use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(service_url = %config.service_url, "Starting activity board");

    let api = SignupClient::new(&config).context("Failed to build HTTP client")?;
    let mut board = ActivityBoard::new(api, StatusSlot::new());

    // Initial load
    board.refresh().await;
    print_board(&board);
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let mut parts = line.splitn(3, ' ');

        match parts.next() {
            Some("refresh") => board.refresh().await,
            Some("signup") => match (parts.next(), parts.next()) {
                (Some(email), Some(activity)) => {
                    board.set_form(email, activity);
                    board.submit_signup().await;
                }
                _ => {
                    println!("usage: signup <email> <activity name>");
                    continue;
                }
            },
            Some("unregister") => match (parts.next(), parts.next()) {
                (Some(email), Some(activity)) => {
                    board.unregister(activity, email).await;
                }
                _ => {
                    println!("usage: unregister <email> <activity name>");
                    continue;
                }
            },
            Some("quit") | Some("exit") => break,
            Some("") | None => continue,
            Some(other) => {
                println!("unknown command: {other}");
                print_help();
                continue;
            }
        }

        print_board(&board);
    }

    Ok(())
}

fn print_board(board: &ActivityBoard) {
    print!("{}", view::format_board(board.view()));
    if let Some(status) = board.status() {
        println!("[{}] {}", status.kind, status.text);
    }
}

fn print_help() {
    println!("commands: refresh | signup <email> <activity name> | unregister <email> <activity name> | quit");
}

/// Initialize logging to stderr so it never interleaves with the board text.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("activity_board=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
