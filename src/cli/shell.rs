//! Interactive menu shell
//!
//! Presentation layer: shows the numbered menu, collects input, and invokes
//! the manager/model. Generic over its reader and writer so that whole
//! sessions can be scripted in tests.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationError, DataStore, ResistanceManager, ResistanceModel};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::parse_event_time;
use crate::infrastructure::traits::Geocoder;

const MAIN_MENU: &str = "\
Welcome to the Resistance! Pick an option:
  1. Register a new member
  2. Register a new protest
  3. Register a new movement
  4. Add a member to a protest
  5. Modify a protest
  6. Add a protest to a movement
  7. List protest members
  8. List members near a protest
  9. List protests near a location
  10. Load in existing resistance data
  11. Exit";

const VALIDATION_MSG: &str = "An input has failed data validation. Please check your input.";

/// Which registry a search-then-select workflow runs against.
#[derive(Debug, Clone, Copy)]
enum SearchKind {
    Member,
    Protest,
    Movement,
}

impl SearchKind {
    fn label(self) -> &'static str {
        match self {
            SearchKind::Member => "member",
            SearchKind::Protest => "protest",
            SearchKind::Movement => "movement",
        }
    }
}

/// The interactive shell. Owns the model for the duration of the session.
pub struct Shell<R: BufRead, W: Write> {
    input: R,
    out: W,
    model: ResistanceModel,
    manager: ResistanceManager,
    store: DataStore,
    geocoder: Arc<dyn Geocoder>,
    settings: Settings,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(
        input: R,
        out: W,
        model: ResistanceModel,
        manager: ResistanceManager,
        store: DataStore,
        geocoder: Arc<dyn Geocoder>,
        settings: Settings,
    ) -> Self {
        Self {
            input,
            out,
            model,
            manager,
            store,
            geocoder,
            settings,
        }
    }

    /// Consume the shell and hand back the model
    /// (used by tests to inspect session outcomes).
    pub fn into_model(self) -> ResistanceModel {
        self.model
    }

    /// The main menu. Shows until the user exits.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.out, "{}", MAIN_MENU)?;
            let choice = match self.prompt("> ") {
                Ok(choice) => choice,
                // closed stdin ends the session without the save prompt
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
                Err(e) => return Err(e),
            };
            if choice == "11" || is_quit_alias(&choice) {
                self.exit_menu()?;
                break;
            }
            match choice.as_str() {
                "1" => self.new_member_menu()?,
                "2" => self.new_protest_menu()?,
                "3" => self.new_movement_menu()?,
                "4" => self.add_to_protest_menu(None)?,
                "5" => self.modify_protest_menu(None)?,
                "6" => self.add_to_movement_menu(None, None)?,
                "7" => self.list_protesters_menu()?,
                "8" => self.nearby_members_menu()?,
                "9" => self.nearby_protests_menu()?,
                "10" => self.load_data_menu()?,
                _ => writeln!(self.out, "Invalid option!")?,
            }
            writeln!(self.out)?;
        }
        Ok(())
    }

    // ---- registration menus ----

    fn new_member_menu(&mut self) -> io::Result<()> {
        writeln!(self.out, "Add a new member.")?;
        let name = self.prompt("  Name: ")?;
        let email = self.prompt("  Email: ")?;
        let zip = self.prompt("  Zip Code: ")?;
        match self.manager.add_member(&mut self.model, &name, &email, &zip) {
            Ok(_) => writeln!(self.out, "{}", output::success("Protester added!")),
            Err(e) => self.report_failure(&e),
        }
    }

    /// Register a protest, then offer to add members to it right away.
    fn new_protest_menu(&mut self) -> io::Result<()> {
        writeln!(self.out, "Add a new protest.")?;
        let name = self.prompt("  Title of protest: ")?;
        let zip = self.prompt("  Location (zip code): ")?;
        let date = self.prompt("  Date and time (ex: Jan 21 2017 13:00 PST): ")?;
        match self.manager.add_protest(&mut self.model, &name, &zip, &date) {
            Ok(protest_name) => {
                writeln!(self.out, "{}", output::success("Protest added!"))?;
                self.add_to_protest_menu(Some(protest_name))
            }
            Err(e) => self.report_failure(&e),
        }
    }

    /// Register a movement, then offer to add protests to it.
    fn new_movement_menu(&mut self) -> io::Result<()> {
        writeln!(self.out, "Add a new movement.")?;
        let name = self.prompt("  Title of movement: ")?;
        match self.manager.add_movement(&mut self.model, &name) {
            Ok(movement_name) => {
                writeln!(self.out, "{}", output::success("Movement added!"))?;
                let mut adding = self.prompt("Add protests to movement? (y/n): ")?;
                while is_yes(&adding) {
                    self.add_to_movement_menu(Some(movement_name.clone()), None)?;
                    adding = self.prompt("Add another protest? (y/n): ")?;
                }
                Ok(())
            }
            Err(e) => self.report_failure(&e),
        }
    }

    // ---- linking menus ----

    /// Add members to a protest, repeating as long as the user wants.
    /// Searches for a protest when none is given.
    fn add_to_protest_menu(&mut self, protest_name: Option<String>) -> io::Result<()> {
        let protest_name = match protest_name {
            Some(name) => name,
            None => match self.search_select(SearchKind::Protest)? {
                Some(name) => name,
                None => return Ok(()),
            },
        };
        let mut adding = self.prompt("Add a member to protest? (y/n): ")?;
        while is_yes(&adding) {
            match self.search_select(SearchKind::Member)? {
                Some(member_name) => {
                    match self.model.add_member_to_protest(&member_name, &protest_name) {
                        Ok(true) => {
                            writeln!(self.out, "{}", output::success("Member added to protest."))?
                        }
                        Ok(false) => writeln!(
                            self.out,
                            "{}",
                            output::detail("Member is already on the roster.")
                        )?,
                        Err(e) => self.report_failure(&e)?,
                    }
                }
                None => writeln!(self.out, "No member selected.")?,
            }
            adding = self.prompt("Add another member? (y/n): ")?;
        }
        Ok(())
    }

    /// Link a protest with a movement, searching for whichever is missing.
    fn add_to_movement_menu(
        &mut self,
        movement_name: Option<String>,
        protest_name: Option<String>,
    ) -> io::Result<()> {
        let protest_name = match protest_name {
            Some(name) => name,
            None => match self.search_select(SearchKind::Protest)? {
                Some(name) => name,
                None => return Ok(()),
            },
        };
        let movement_name = match movement_name {
            Some(name) => name,
            None => match self.search_select(SearchKind::Movement)? {
                Some(name) => name,
                None => return Ok(()),
            },
        };
        match self.model.add_protest_to_movement(&protest_name, &movement_name) {
            Ok(true) => writeln!(self.out, "{}", output::success("Protest added to movement."))?,
            Ok(false) => writeln!(
                self.out,
                "{}",
                output::detail("Protest already belongs to that movement.")
            )?,
            Err(e) => self.report_failure(&e)?,
        }
        Ok(())
    }

    /// Edit sub-menu for one protest (title, time, movement membership).
    fn modify_protest_menu(&mut self, protest_name: Option<String>) -> io::Result<()> {
        let mut protest_name = match protest_name {
            Some(name) => name,
            None => match self.search_select(SearchKind::Protest)? {
                Some(name) => name,
                None => return Ok(()),
            },
        };
        loop {
            writeln!(
                self.out,
                "Edit protest '{}'.\n  1. Change title\n  2. Change time\n  3. Add to movement\n  4. Return to previous menu",
                protest_name
            )?;
            let choice = self.prompt("> ")?;
            match choice.as_str() {
                "1" => {
                    let new_title = self.prompt("  New title: ")?;
                    let new_title = new_title.trim();
                    if new_title.is_empty() {
                        writeln!(
                            self.out,
                            "{}",
                            output::detail("No title given, nothing changed.")
                        )?;
                    } else {
                        match self
                            .model
                            .modify_protest(&protest_name, Some(new_title), None)
                        {
                            Ok(()) => {
                                // keep editing under the new name
                                protest_name = new_title.to_string();
                                writeln!(self.out, "{}", output::success("Title changed."))?;
                            }
                            Err(e) => self.report_failure(&e)?,
                        }
                    }
                }
                "2" => {
                    let new_time = self.prompt("  New date and time (ex: Jan 21 2017 13:00 PST): ")?;
                    let result = parse_event_time(&new_time)
                        .map_err(ApplicationError::from)
                        .and_then(|time| {
                            self.model.modify_protest(&protest_name, None, Some(time))
                        });
                    match result {
                        Ok(()) => writeln!(self.out, "{}", output::success("Time changed."))?,
                        Err(e) => self.report_failure(&e)?,
                    }
                }
                "3" => self.add_to_movement_menu(None, Some(protest_name.clone()))?,
                "4" => break,
                _ => writeln!(self.out, "Invalid option!")?,
            }
        }
        Ok(())
    }

    // ---- listing menus ----

    fn list_protesters_menu(&mut self) -> io::Result<()> {
        let protest_name = match self.search_select(SearchKind::Protest)? {
            Some(name) => name,
            None => return Ok(()),
        };
        match self.model.get_protesters(&protest_name) {
            Ok(members) => {
                writeln!(
                    self.out,
                    "{}",
                    output::header("Members participating in this action:")
                )?;
                self.print_listing(&members)?;
                self.pause()
            }
            Err(e) => self.report_failure(&e),
        }
    }

    fn nearby_members_menu(&mut self) -> io::Result<()> {
        let protest_name = match self.search_select(SearchKind::Protest)? {
            Some(name) => name,
            None => return Ok(()),
        };
        let radius = self.prompt_radius(self.settings.member_radius_miles)?;
        match self.model.users_near_protest(&protest_name, radius) {
            Ok(members) => {
                writeln!(
                    self.out,
                    "{}",
                    output::header("Members near this action:")
                )?;
                self.print_listing(&members)?;
                self.pause()
            }
            Err(e) => self.report_failure(&e),
        }
    }

    fn nearby_protests_menu(&mut self) -> io::Result<()> {
        let zip = self.prompt("Zip code to search near: ")?;
        let origin = match self.geocoder.locate(&zip) {
            Ok(location) => location,
            Err(e) => return self.report_failure(&e.into()),
        };
        let radius = self.prompt_radius(self.settings.protest_radius_miles)?;
        let protests = self.model.nearby_protests(&origin, radius);
        writeln!(self.out, "{}", output::header("Nearby protests:"))?;
        self.print_listing(&protests)?;
        self.pause()
    }

    // ---- persistence menus ----

    fn load_data_menu(&mut self) -> io::Result<()> {
        let file_name = self.prompt("  File Name: ")?;
        writeln!(self.out, "  Reading in {}...", file_name)?;
        match self.store.load(Path::new(&file_name)) {
            Ok(snapshot) => {
                self.model.merge(snapshot);
                writeln!(
                    self.out,
                    "{}",
                    output::success(&format!(
                        "Loaded. Now tracking {} members, {} protests, {} movements.",
                        self.model.member_count(),
                        self.model.protest_count(),
                        self.model.movement_count()
                    ))
                )?;
            }
            Err(e) => writeln!(self.out, "{}", output::error_line(&e))?,
        }
        self.pause()
    }

    /// Exit flow: offer to save before leaving.
    fn exit_menu(&mut self) -> io::Result<()> {
        let save = self.prompt("Do you want to save the data? (y/n): ")?;
        if !is_yes(&save) {
            return Ok(());
        }
        let default_name = self.settings.data_file.clone();
        let file_name = self.prompt(&format!(
            "Please provide the file name (default: {}): ",
            default_name
        ))?;
        let file_name = if file_name.is_empty() {
            default_name
        } else {
            file_name
        };
        match self.store.save(Path::new(&file_name), &self.model.snapshot()) {
            Ok(()) => writeln!(self.out, "{}", output::success("Data saved.")),
            Err(e) => writeln!(self.out, "{}", output::error_line(&e)),
        }
    }

    // ---- shared helpers ----

    /// Search-then-select: prompt for a query, list numbered matches, read
    /// a 1-based choice. Returns `None` when nothing matched or the choice
    /// was out of range.
    fn search_select(&mut self, kind: SearchKind) -> io::Result<Option<String>> {
        writeln!(self.out, "Searching for a {}.", kind.label())?;
        let query = self.prompt("Search query: ")?;
        let results = match kind {
            SearchKind::Member => self.model.find_member_names(&query),
            SearchKind::Protest => self.model.find_protest_names(&query),
            SearchKind::Movement => self.model.find_movement_names(&query),
        };
        debug!(kind = kind.label(), %query, matches = results.len());
        if results.is_empty() {
            writeln!(self.out, "No results found.")?;
            return Ok(None);
        }
        writeln!(self.out, "Results found:")?;
        for (idx, name) in results.iter().enumerate() {
            writeln!(self.out, "{}", output::detail(&format!("{}. {}", idx + 1, name)))?;
        }
        let choice = self.prompt(&format!("Choose a {} (1-{}): ", kind.label(), results.len()))?;
        let selected = choice
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=results.len()).contains(n))
            .map(|n| results[n - 1].clone());
        Ok(selected)
    }

    /// Hold the output on screen until the user hits enter, so listings
    /// are readable before the menu redraws.
    fn pause(&mut self) -> io::Result<()> {
        self.prompt("(Press enter to continue)")?;
        Ok(())
    }

    fn prompt(&mut self, msg: &str) -> io::Result<String> {
        write!(self.out, "{}", msg)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        Ok(line.trim().to_string())
    }

    /// Prompt for a radius in miles, falling back to `default` on empty or
    /// unparsable input.
    fn prompt_radius(&mut self, default: f64) -> io::Result<f64> {
        let raw = self.prompt(&format!(
            "Distance in miles from protest (default: {}): ",
            default
        ))?;
        Ok(raw.parse::<f64>().ok().filter(|r| *r >= 0.0).unwrap_or(default))
    }

    fn print_listing(&mut self, items: &[String]) -> io::Result<()> {
        if items.is_empty() {
            writeln!(self.out, "{}", output::detail("(none)"))?;
            return Ok(());
        }
        for item in items {
            writeln!(self.out, "{}", output::detail(item))?;
        }
        Ok(())
    }

    fn report_failure(&mut self, e: &ApplicationError) -> io::Result<()> {
        if e.is_validation() {
            writeln!(self.out, "{}", output::failure(VALIDATION_MSG))?;
            writeln!(self.out, "{}", output::detail(e))
        } else {
            writeln!(self.out, "{}", output::failure(e))
        }
    }
}

/// `:q` (any case, with or without trailing text) exits, like option 11.
fn is_quit_alias(input: &str) -> bool {
    input
        .get(..2)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(":q"))
}

fn is_yes(input: &str) -> bool {
    input.to_lowercase().starts_with('y')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_alias() {
        assert!(is_quit_alias(":q"));
        assert!(is_quit_alias(":Quit"));
        assert!(!is_quit_alias("q"));
        assert!(!is_quit_alias("11q"));
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y"));
        assert!(is_yes("Yes please"));
        assert!(!is_yes("n"));
        assert!(!is_yes(""));
    }
}
