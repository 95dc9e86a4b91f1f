// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::env::current_dir;
use std::io::stdin;
use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use flashdeck_core::card_store::CardStore;
use flashdeck_core::error::Fallible;
use flashdeck_core::types::card_id::CardId;

use crate::cmd::drill::drill;
use crate::cmd::manage::add_card;
use crate::cmd::manage::delete_card;
use crate::cmd::manage::edit_card;
use crate::cmd::manage::list_cards;
use crate::cmd::manage::list_categories;
use crate::cmd::manage::show_category;
use crate::config::Config;
use crate::db::SqliteStore;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file. By default, `flashdeck.toml` in the current directory is used if it exists.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Path to the database. Overrides the configuration file.
    #[arg(long, global = true)]
    database: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a card.
    Add {
        question: String,
        answer: String,
        /// The card's category. By default, the configured default category is used.
        #[arg(long)]
        category: Option<String>,
    },
    /// Change a card's question and answer, and optionally its category.
    Edit {
        id: CardId,
        question: String,
        answer: String,
        /// Move the card to this category.
        #[arg(long)]
        category: Option<String>,
    },
    /// Delete a card.
    Delete { id: CardId },
    /// List every card, in the order they were added.
    List,
    /// List the categories that have cards.
    Categories,
    /// List the cards in a category.
    Show { category: String },
    /// Review cards interactively.
    Drill {
        /// Maximum number of reviews in this session. By default, the session runs until the queue is empty.
        #[arg(long)]
        limit: Option<usize>,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Cli = Cli::parse();
    let config = Config::load(cli.config.as_deref(), &current_dir()?)?;
    let database = cli.database.unwrap_or(config.database);
    let mut cards = CardStore::open(SqliteStore::open(&database)?)?;
    let mut out = stdout().lock();
    match cli.command {
        Command::Add {
            question,
            answer,
            category,
        } => {
            let category = category.unwrap_or(config.default_category);
            add_card(&mut cards, &mut out, &question, &answer, &category)?;
        }
        Command::Edit {
            id,
            question,
            answer,
            category,
        } => edit_card(
            &mut cards,
            &mut out,
            id,
            &question,
            &answer,
            category.as_deref(),
        )?,
        Command::Delete { id } => delete_card(&mut cards, &mut out, id)?,
        Command::List => list_cards(&cards, &mut out)?,
        Command::Categories => list_categories(&cards, &mut out)?,
        Command::Show { category } => show_category(&cards, &mut out, &category)?,
        Command::Drill { limit } => {
            drill(&mut cards, &mut stdin().lock(), &mut out, limit)?;
        }
    }
    drop(cards.close());
    Ok(())
}
