//! Interactive numbered menu over a loaded archive.
//!
//! The session owns the in-memory store for its whole lifetime. Errors from
//! individual actions are shown and the menu continues; only a failing
//! prompter ends the session early.

use std::io;

use photoarchive_core::{
    search_by_date_and_tag, search_by_location, sort_multi_level, ArchiveError, LoadStatus,
    PhotoStore, SearchResults, StorageEngine,
};

use crate::app::AppContext;
use crate::helpers::{
    resolve_photo, stdin_is_terminal, LinePrompter, MissingField, PhotoInput, Prompter,
    TerminalPrompter,
};
use crate::output::{render_photo_list, NumberedPhoto};
use crate::ui::render::error_message;
use crate::ui::theme::{styled, styles};
use crate::ui::{badge, print_error, Badge, UiContext};

const INVALID_CHOICE: &str = "Invalid choice. Enter a number from 0 to 6.";

/// Whether the menu keeps running after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
}

/// Run the interactive menu. Always succeeds; failures are printed.
pub fn handle_menu(ctx: &AppContext) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false, None);
    let storage = match ctx.storage() {
        Ok(storage) => storage,
        Err(err) => {
            print_error(&ui, &format!("{:#}", err), None);
            return Ok(());
        }
    };

    let result = if ui.is_tty && stdin_is_terminal() {
        Session::start(storage, TerminalPrompter, ui.clone()).and_then(|mut s| s.run())
    } else {
        let stdin = io::stdin();
        let prompter = LinePrompter::new(stdin.lock(), io::stdout());
        Session::start(storage, prompter, ui.clone()).and_then(|mut s| s.run())
    };

    if let Err(err) = result {
        print_error(&ui, &format!("{:#}", err), None);
    }
    Ok(())
}

/// One interactive session: a store, where it persists, and who answers.
pub struct Session<S, P> {
    storage: S,
    prompter: P,
    ui: UiContext,
    store: PhotoStore,
    unsaved: bool,
}

impl<S: StorageEngine, P: Prompter> Session<S, P> {
    /// Load the archive and report what was found.
    ///
    /// A load failure is reported and the session starts empty.
    pub fn start(storage: S, prompter: P, ui: UiContext) -> anyhow::Result<Self> {
        let mut session = Self {
            storage,
            prompter,
            ui,
            store: PhotoStore::new(),
            unsaved: false,
        };

        let location = session.storage.location().display().to_string();
        match session.storage.load() {
            Ok(outcome) => {
                session.store = outcome.store;
                let message = match outcome.status {
                    LoadStatus::NotFound => format!(
                        "No archive at {}. Starting with an empty archive.",
                        location
                    ),
                    LoadStatus::Empty => {
                        format!("Archive {} exists but holds no photos.", location)
                    }
                    LoadStatus::Loaded(count) => {
                        format!("Loaded {} photo(s) from {}.", count, location)
                    }
                };
                session.info(&message)?;
            }
            Err(err) => {
                session.error(&err)?;
                session.info("Starting with an empty archive.")?;
            }
        }
        Ok(session)
    }

    /// Consume the session, returning the store and the prompter.
    #[cfg(test)]
    pub fn into_parts(self) -> (PhotoStore, P) {
        (self.store, self.prompter)
    }

    /// Show the menu and dispatch choices until exit or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.show_menu()?;
            let Some(choice) = self.prompter.input("Choose an option")? else {
                self.info("Input ended. Exiting without saving.")?;
                return Ok(());
            };
            tracing::debug!(choice = choice.trim(), "menu choice");

            let step = match choice.trim() {
                "1" => self.list()?,
                "2" => self.add()?,
                "3" => self.search_place()?,
                "4" => self.search_date_tag()?,
                "5" => self.sort()?,
                "6" => {
                    self.save()?;
                    Step::Continue
                }
                "0" => self.exit()?,
                _ => {
                    self.prompter.say(INVALID_CHOICE)?;
                    Step::Continue
                }
            };
            if step == Step::Exit {
                return Ok(());
            }
        }
    }

    fn show_menu(&mut self) -> anyhow::Result<()> {
        let title = format!(
            "Photo Archive ({}/{})",
            self.store.len(),
            PhotoStore::CAPACITY
        );
        let lines = [
            styled(&title, styles::bold(), self.ui.color),
            "1. List all photos".to_string(),
            "2. Add a photo".to_string(),
            "3. Search by location".to_string(),
            "4. Search by date and tag".to_string(),
            "5. Sort by date, category, resolution".to_string(),
            "6. Save".to_string(),
            "0. Exit".to_string(),
        ];
        self.prompter.say(&lines.join("\n"))
    }

    fn list(&mut self) -> anyhow::Result<Step> {
        if self.store.is_empty() {
            self.error(&ArchiveError::EmptyStore)?;
            return Ok(Step::Continue);
        }
        let photos: Vec<NumberedPhoto<'_>> = self
            .store
            .iter()
            .enumerate()
            .map(|(index, photo)| (index + 1, photo))
            .collect();
        let rendered = render_photo_list(&self.ui, &photos);
        self.prompter.say(&rendered)?;
        Ok(Step::Continue)
    }

    fn add(&mut self) -> anyhow::Result<Step> {
        if self.store.is_full() {
            self.error(&ArchiveError::CapacityExceeded {
                capacity: PhotoStore::CAPACITY,
            })?;
            return Ok(Step::Continue);
        }

        let Some(photo) =
            resolve_photo(&PhotoInput::default(), &mut self.prompter, MissingField::Prompt)?
        else {
            return self.input_ended();
        };

        let name = photo.name.clone();
        match self.store.append(photo) {
            Ok(()) => {
                self.unsaved = true;
                let message = format!("Added \"{}\" as #{}", name, self.store.len());
                self.ok(&message)?;
            }
            Err(err) => self.error(&err)?,
        }
        Ok(Step::Continue)
    }

    fn search_place(&mut self) -> anyhow::Result<Step> {
        if self.store.is_empty() {
            self.error(&ArchiveError::EmptyStore)?;
            return Ok(Step::Continue);
        }
        let Some(query) = self.prompter.input("Place to search for")? else {
            return self.input_ended();
        };

        let outcome =
            search_by_location(&self.store, &query).map(|results| self.render_results(&results));
        self.show_search_outcome(outcome)?;
        Ok(Step::Continue)
    }

    fn search_date_tag(&mut self) -> anyhow::Result<Step> {
        if self.store.is_empty() {
            self.error(&ArchiveError::EmptyStore)?;
            return Ok(Step::Continue);
        }
        let Some(date) = self.prompter.input("Date (YYYY-MM-DD)")? else {
            return self.input_ended();
        };
        let Some(tag) = self.prompter.input("Tag")? else {
            return self.input_ended();
        };

        let outcome = search_by_date_and_tag(&self.store, date.trim(), &tag)
            .map(|results| self.render_results(&results));
        self.show_search_outcome(outcome)?;
        Ok(Step::Continue)
    }

    /// Match count and rendered matches (`None` when there are none).
    fn render_results(&self, results: &SearchResults<'_>) -> (usize, Option<String>) {
        if results.is_empty() {
            return (0, None);
        }
        let hits: Vec<NumberedPhoto<'_>> = results
            .hits()
            .iter()
            .map(|hit| (hit.position, hit.photo))
            .collect();
        (results.count(), Some(render_photo_list(&self.ui, &hits)))
    }

    fn show_search_outcome(
        &mut self,
        outcome: photoarchive_core::Result<(usize, Option<String>)>,
    ) -> anyhow::Result<()> {
        match outcome {
            Ok((_, None)) => self.info("No photos found."),
            Ok((count, Some(rendered))) => {
                self.prompter.say(&rendered)?;
                self.info(&format!("Found {} photo(s).", count))
            }
            Err(err) => self.error(&err),
        }
    }

    fn sort(&mut self) -> anyhow::Result<Step> {
        match sort_multi_level(&mut self.store) {
            Ok(()) => {
                self.unsaved = true;
                let message = format!(
                    "Sorted {} photos by date, category, then resolution",
                    self.store.len()
                );
                self.ok(&message)?;
            }
            Err(err) => self.error(&err)?,
        }
        Ok(Step::Continue)
    }

    /// Write the store. Returns whether the write succeeded.
    fn save(&mut self) -> anyhow::Result<bool> {
        match self.storage.save(&self.store) {
            Ok(()) => {
                self.unsaved = false;
                let message = format!(
                    "Saved {} photo(s) to {}",
                    self.store.len(),
                    self.storage.location().display()
                );
                self.ok(&message)?;
                Ok(true)
            }
            Err(err) => {
                self.error(&err)?;
                Ok(false)
            }
        }
    }

    fn exit(&mut self) -> anyhow::Result<Step> {
        if self.unsaved {
            match self
                .prompter
                .confirm("You have unsaved changes. Save before exiting?", true)?
            {
                Some(true) => {
                    self.save()?;
                }
                Some(false) => self.info("Changes discarded.")?,
                None => return self.input_ended(),
            }
        }
        self.prompter.say("Goodbye.")?;
        Ok(Step::Exit)
    }

    fn input_ended(&mut self) -> anyhow::Result<Step> {
        self.info("Input ended. Exiting without saving.")?;
        Ok(Step::Exit)
    }

    fn ok(&mut self, message: &str) -> anyhow::Result<()> {
        let line = badge(&self.ui, Badge::Ok, message);
        self.prompter.say(&line)
    }

    fn info(&mut self, message: &str) -> anyhow::Result<()> {
        let line = badge(&self.ui, Badge::Info, message);
        self.prompter.say(&line)
    }

    fn error(&mut self, err: &ArchiveError) -> anyhow::Result<()> {
        let line = error_message(&self.ui, &err.to_string(), None);
        self.prompter.say(&line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;

    use photoarchive_core::storage::encode;
    use photoarchive_core::{FlatFileStorage, Photo};
    use tempfile::tempdir;

    use crate::ui::OutputMode;

    type TestPrompter = LinePrompter<Cursor<Vec<u8>>, Vec<u8>>;

    fn plain_ui() -> UiContext {
        UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            mode: OutputMode::Plain,
        }
    }

    fn photo(name: &str, date: &str, tags: &str) -> Photo {
        Photo::new(name, date, "Sochi", "landscape")
            .with_tags(tags)
            .with_size_mb(4.5)
            .with_dimensions(1920, 1080)
            .with_format("JPG")
    }

    /// Run a whole session over `input`, returning the final store and output.
    fn run_session(path: &Path, input: &str) -> (PhotoStore, String) {
        let prompter: TestPrompter =
            LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut session =
            Session::start(FlatFileStorage::new(path), prompter, plain_ui()).unwrap();
        session.run().unwrap();
        let (store, prompter) = session.into_parts();
        (store, String::from_utf8(prompter.into_writer()).unwrap())
    }

    const ADD_ANSWERS: &str =
        "Sunset\n2023-07-01\nSochi\nlandscape\nbeach,sunset\n4,5\n1920\n1080\nJPG\n";

    #[test]
    fn test_missing_archive_starts_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("photo_archive.txt");

        let (store, out) = run_session(&path, "0\n");

        assert!(store.is_empty());
        assert!(out.contains("Starting with an empty archive"));
        assert!(out.contains("Goodbye."));
        assert!(!path.exists());
    }

    #[test]
    fn test_startup_reports_loaded_count() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("photo_archive.txt");
        fs::write(&path, encode(&[photo("a", "2023-07-01", "x"), photo("b", "2023-07-02", "y")]))
            .unwrap();

        let (store, out) = run_session(&path, "0\n");
        assert_eq!(store.len(), 2);
        assert!(out.contains("Loaded 2 photo(s)"));
    }

    #[test]
    fn test_startup_reports_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("photo_archive.txt");
        fs::write(&path, "").unwrap();

        let (_, out) = run_session(&path, "0\n");
        assert!(out.contains("exists but holds no photos"));
    }

    #[test]
    fn test_add_then_save() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("photo_archive.txt");

        let input = format!("2\n{}6\n0\n", ADD_ANSWERS);
        let (store, out) = run_session(&path, &input);

        assert_eq!(store.len(), 1);
        assert!(out.contains("Added \"Sunset\" as #1"));
        assert!(!out.contains("unsaved changes"));
        let saved = fs::read_to_string(&path).unwrap();
        assert_eq!(
            saved,
            "Sunset|2023-07-01|Sochi|landscape|beach,sunset|4.50|1920|1080|JPG\n"
        );
    }

    #[test]
    fn test_exit_with_unsaved_changes_asks_to_save() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("photo_archive.txt");

        let (_, out) = run_session(&path, &format!("2\n{}0\ny\n", ADD_ANSWERS));
        assert!(out.contains("unsaved changes"));
        assert!(path.exists());
    }

    #[test]
    fn test_exit_can_discard_changes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("photo_archive.txt");

        let (store, out) = run_session(&path, &format!("2\n{}0\nn\n", ADD_ANSWERS));
        assert_eq!(store.len(), 1);
        assert!(out.contains("Changes discarded."));
        assert!(!path.exists());
    }

    #[test]
    fn test_invalid_choices_reprompt() {
        let dir = tempdir().unwrap();
        let (_, out) = run_session(&dir.path().join("a.txt"), "9\nabc\n\n0\n");
        assert_eq!(out.matches(INVALID_CHOICE).count(), 3);
        assert!(out.contains("Goodbye."));
    }

    #[test]
    fn test_end_of_input_exits_without_saving() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("photo_archive.txt");

        let (store, out) = run_session(&path, "2\nSunset\n2023-07-01\n");
        assert!(store.is_empty());
        assert!(out.contains("Input ended. Exiting without saving."));
        assert!(!path.exists());
    }

    #[test]
    fn test_empty_archive_refuses_list_and_search() {
        let dir = tempdir().unwrap();
        let (_, out) = run_session(&dir.path().join("a.txt"), "1\n3\n4\n0\n");
        assert_eq!(out.matches("error=Archive is empty").count(), 3);
        assert!(!out.contains("Place to search for"));
    }

    #[test]
    fn test_full_archive_refuses_add_before_prompting() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("photo_archive.txt");
        let photos = vec![photo("a", "2023-07-01", "x"); PhotoStore::CAPACITY];
        fs::write(&path, encode(&photos)).unwrap();

        let (store, out) = run_session(&path, "2\n0\n");
        assert_eq!(store.len(), PhotoStore::CAPACITY);
        assert!(out.contains("Archive is full (max 100 records)"));
        assert!(!out.contains("Photo name"));
    }

    #[test]
    fn test_search_by_location_lists_matches() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("photo_archive.txt");
        fs::write(&path, encode(&[photo("a", "2023-07-01", "x")])).unwrap();

        let (_, out) = run_session(&path, "3\nSoc\n3\nParis\n0\n");
        assert!(out.contains("1|a|2023-07-01|Sochi|"));
        assert!(out.contains("Found 1 photo(s)."));
        assert!(out.contains("No photos found."));
    }

    #[test]
    fn test_search_by_date_and_tag() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("photo_archive.txt");
        fs::write(
            &path,
            encode(&[
                photo("first", "2023-07-01", "city"),
                photo("second", "2023-07-01", "beach,sunset"),
            ]),
        )
        .unwrap();

        let (_, out) = run_session(&path, "4\n2023-07-01\nsunset\n4\n2023-07-01\nwinter\n0\n");
        assert!(out.contains("2|second|2023-07-01|"));
        assert!(!out.contains("1|first|"));
        assert!(out.contains("No photos found."));
    }

    #[test]
    fn test_search_by_date_rejects_bad_date_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("photo_archive.txt");
        fs::write(&path, encode(&[photo("a", "2023-07-01", "x")])).unwrap();

        let (_, out) = run_session(&path, "4\n2023-13-01\nx\n0\n");
        assert!(out.contains("error=Validation error"));
        assert!(out.contains("Goodbye."));
    }

    #[test]
    fn test_sort_marks_unsaved_and_orders_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("photo_archive.txt");
        fs::write(
            &path,
            encode(&[photo("late", "2024-01-01", "x"), photo("early", "2020-01-01", "x")]),
        )
        .unwrap();

        let (store, out) = run_session(&path, "5\n0\nn\n");
        assert!(out.contains("Sorted 2 photos"));
        assert!(out.contains("unsaved changes"));
        assert_eq!(store.get(0).map(|p| p.name.as_str()), Some("early"));
    }

    #[test]
    fn test_sort_needs_two_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("photo_archive.txt");
        fs::write(&path, encode(&[photo("only", "2023-07-01", "x")])).unwrap();

        let (_, out) = run_session(&path, "5\n0\n");
        assert!(out.contains("Nothing to sort (1 record(s) in archive)"));
        assert!(!out.contains("unsaved changes"));
    }

    #[test]
    fn test_failed_save_keeps_records_in_memory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("archive.txt");

        let (store, out) = run_session(&path, &format!("2\n{}6\n0\nn\n", ADD_ANSWERS));
        assert_eq!(store.len(), 1);
        assert!(out.contains("error=Storage error"));
        assert!(out.contains("unsaved changes"));
    }
}
