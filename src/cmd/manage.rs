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

//! Commands that change or print the card collection.

use std::io::Write;

use flashdeck_core::card_store::CardStore;
use flashdeck_core::error::Fallible;
use flashdeck_core::store::DocumentStore;
use flashdeck_core::types::card_id::CardId;

pub fn add_card<S: DocumentStore>(
    cards: &mut CardStore<S>,
    out: &mut impl Write,
    question: &str,
    answer: &str,
    category: &str,
) -> Fallible<()> {
    let card = cards.add(question, answer, category)?;
    writeln!(out, "Card added with ID: {}", card.id())?;
    Ok(())
}

pub fn edit_card<S: DocumentStore>(
    cards: &mut CardStore<S>,
    out: &mut impl Write,
    id: CardId,
    question: &str,
    answer: &str,
    category: Option<&str>,
) -> Fallible<()> {
    cards.edit(id, question, answer, category)?;
    writeln!(out, "Card {id} updated.")?;
    Ok(())
}

pub fn delete_card<S: DocumentStore>(
    cards: &mut CardStore<S>,
    out: &mut impl Write,
    id: CardId,
) -> Fallible<()> {
    cards.delete(id)?;
    writeln!(out, "Card {id} deleted.")?;
    Ok(())
}

pub fn list_cards<S: DocumentStore>(cards: &CardStore<S>, out: &mut impl Write) -> Fallible<()> {
    for card in cards.cards() {
        writeln!(
            out,
            "{}: {} -> {} [{}]",
            card.id(),
            card.question(),
            card.answer(),
            card.category()
        )?;
    }
    Ok(())
}

pub fn list_categories<S: DocumentStore>(
    cards: &CardStore<S>,
    out: &mut impl Write,
) -> Fallible<()> {
    for category in cards.list_categories() {
        writeln!(out, "{category}")?;
    }
    Ok(())
}

pub fn show_category<S: DocumentStore>(
    cards: &CardStore<S>,
    out: &mut impl Write,
    category: &str,
) -> Fallible<()> {
    let members = cards.get_by_category(category);
    if members.is_empty() {
        writeln!(out, "No cards in category {category}.")?;
    }
    for card in members {
        writeln!(out, "- {} -> {}", card.question(), card.answer())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use flashdeck_core::store::MemoryStore;

    use super::*;

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8_lossy(&buf).into_owned()
    }

    #[test]
    fn test_add_and_list() -> Fallible<()> {
        let mut cards = CardStore::open(MemoryStore::new())?;
        let mut out = Vec::new();
        add_card(&mut cards, &mut out, "What is 9 + 10?", "19", "Math")?;
        add_card(&mut cards, &mut out, "Who discovered gravity?", "Newton", "Science")?;
        let ids: Vec<CardId> = cards.cards().map(|c| c.id()).collect();
        assert_eq!(
            output(out),
            format!("Card added with ID: {}\nCard added with ID: {}\n", ids[0], ids[1])
        );

        let mut out = Vec::new();
        list_cards(&cards, &mut out)?;
        assert_eq!(
            output(out),
            format!(
                "{}: What is 9 + 10? -> 19 [Math]\n{}: Who discovered gravity? -> Newton [Science]\n",
                ids[0], ids[1]
            )
        );

        let mut out = Vec::new();
        list_categories(&cards, &mut out)?;
        assert_eq!(output(out), "Math\nScience\n");

        let mut out = Vec::new();
        show_category(&cards, &mut out, "Science")?;
        assert_eq!(output(out), "- Who discovered gravity? -> Newton\n");
        Ok(())
    }

    #[test]
    fn test_show_unknown_category() -> Fallible<()> {
        let cards = CardStore::open(MemoryStore::new())?;
        let mut out = Vec::new();
        show_category(&cards, &mut out, "History")?;
        assert_eq!(output(out), "No cards in category History.\n");
        Ok(())
    }

    #[test]
    fn test_edit_and_delete() -> Fallible<()> {
        let mut cards = CardStore::open(MemoryStore::new())?;
        let id = cards.add("Q", "A", "Math")?.id();

        let mut out = Vec::new();
        edit_card(&mut cards, &mut out, id, "Q'", "A'", Some("Science"))?;
        delete_card(&mut cards, &mut out, id)?;
        assert_eq!(
            output(out),
            format!("Card {id} updated.\nCard {id} deleted.\n")
        );

        let mut out = Vec::new();
        let err = delete_card(&mut cards, &mut out, id).err();
        assert_eq!(
            err.map(|e| e.to_string()),
            Some(format!("error: card {id} not found"))
        );
        assert!(out.is_empty());
        Ok(())
    }
}
