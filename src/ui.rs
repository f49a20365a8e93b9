// UI layer: prints the numbered genre menu and reads the user's choice
// with `dialoguer`. Index resolution lives in `resolve_selection` so it can
// be tested without a terminal.

use anyhow::Result;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use thiserror::Error;

use crate::api::Genre;

const PROMPT: &str = "Please Choose a Genre # to See Associated RAWG Games";

/// Why a typed selection could not be turned into a genre.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("{index} is out of range, pick 0 to {}", .len - 1)]
    OutOfRange { index: usize, len: usize },

    #[error("the API returned no genres")]
    NoGenres,
}

/// Menu text: a header line, then `   {index} {name}` per genre.
pub fn genre_menu(genres: &[Genre]) -> String {
    let mut menu = String::from("Available Genres:\n");
    for (i, genre) in genres.iter().enumerate() {
        menu.push_str(&format!("   {} {}\n", i, genre.name));
    }
    menu
}

pub fn print_genre_menu(genres: &[Genre]) {
    print!("{}", genre_menu(genres));
}

/// Map one line of user input to the genre at that zero-based index.
pub fn resolve_selection<'a>(genres: &'a [Genre], input: &str) -> Result<&'a Genre, SelectionError> {
    if genres.is_empty() {
        return Err(SelectionError::NoGenres);
    }
    let input = input.trim();
    let index: usize = input
        .parse()
        .map_err(|_| SelectionError::NotANumber(input.to_string()))?;
    genres.get(index).ok_or(SelectionError::OutOfRange {
        index,
        len: genres.len(),
    })
}

/// Prompt until the user enters a valid index and return that genre.
/// An empty list fails immediately since no answer could be valid.
pub fn choose_genre(genres: &[Genre]) -> Result<&Genre> {
    if genres.is_empty() {
        return Err(SelectionError::NoGenres.into());
    }
    // The validator re-prompts on error, so the final answer always resolves.
    let answer: String = Input::new()
        .with_prompt(PROMPT)
        .validate_with(|input: &String| resolve_selection(genres, input).map(|_| ()))
        .interact_text()?;
    let genre = resolve_selection(genres, &answer)?;
    println!("Genre chosen: {}", genre.name);
    Ok(genre)
}

/// Spinner shown while a blocking request is in flight.
pub fn spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genres(names: &[&str]) -> Vec<Genre> {
        names.iter().map(|n| Genre { name: n.to_string() }).collect()
    }

    #[test]
    fn every_valid_index_resolves_to_its_genre() {
        let list = genres(&["Action", "Indie", "Adventure", "RPG"]);
        for (i, expected) in list.iter().enumerate() {
            let got = resolve_selection(&list, &i.to_string()).unwrap();
            assert_eq!(got, expected);
        }
    }

    #[test]
    fn index_one_is_indie() {
        let list = genres(&["Action", "Indie"]);
        assert_eq!(resolve_selection(&list, " 1\n").unwrap().name, "Indie");
    }

    #[test]
    fn rejects_bad_input() {
        let list = genres(&["Action", "Indie"]);
        assert_eq!(
            resolve_selection(&list, "two"),
            Err(SelectionError::NotANumber("two".into()))
        );
        assert_eq!(
            resolve_selection(&list, "-1"),
            Err(SelectionError::NotANumber("-1".into()))
        );
        assert_eq!(
            resolve_selection(&list, "2"),
            Err(SelectionError::OutOfRange { index: 2, len: 2 })
        );
        assert_eq!(resolve_selection(&[], "0"), Err(SelectionError::NoGenres));
    }

    #[test]
    fn out_of_range_message_names_the_bounds() {
        let err = SelectionError::OutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "7 is out of range, pick 0 to 2");
    }

    #[test]
    fn menu_lists_indices_in_order() {
        let list = genres(&["Action", "Indie"]);
        assert_eq!(genre_menu(&list), "Available Genres:\n   0 Action\n   1 Indie\n");
    }

    #[test]
    fn choose_genre_fails_fast_on_empty_list() {
        assert!(choose_genre(&[]).is_err());
    }
}
