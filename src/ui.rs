// UI layer: the numbered menu loop and the flows behind each option.
// Input comes through a `Prompter` so the same flows run on a terminal
// (dialoguer) or on piped input; output goes to any `Write`.

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::query::BookQuery;
use anyhow::Result;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing::warn;

const MENU: &str = "\n--- Menú ---
1. Buscar libro por título
2. Listar libros registrados
3. Listar autores registrados
4. Listar autores vivos en un determinado año
5. Listar libros por idioma
6. Salir";

const INVALID_NUMBER: &str = "Por favor, introduzca un número válido.";

/// Source of user answers. Returns `None` once input is exhausted.
pub trait Prompter {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<Option<String>>;
}

/// Interactive prompts backed by `dialoguer::Input`.
#[derive(Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<Option<String>> {
        // The menu text may still be buffered.
        out.flush()?;
        let answer = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();
        match answer {
            Ok(line) => Ok(Some(line)),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Plain line reader for piped stdin and tests.
pub struct LinePrompter<R> {
    reader: R,
}

impl<R: BufRead> LinePrompter<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Prompter for LinePrompter<R> {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<Option<String>> {
        write!(out, "{}: ", prompt)?;
        out.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    SearchByTitle,
    ListBooks,
    ListAuthors,
    AuthorsAliveIn,
    BooksByLanguage,
    Exit,
}

impl MenuOption {
    pub fn from_choice(choice: i32) -> Option<Self> {
        match choice {
            1 => Some(Self::SearchByTitle),
            2 => Some(Self::ListBooks),
            3 => Some(Self::ListAuthors),
            4 => Some(Self::AuthorsAliveIn),
            5 => Some(Self::BooksByLanguage),
            6 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// One interactive run of the menu.
pub struct Session<'a, P, W> {
    api: &'a ApiClient,
    prompter: &'a mut P,
    out: &'a mut W,
    progress: bool,
}

impl<'a, P: Prompter, W: Write> Session<'a, P, W> {
    pub fn new(api: &'a ApiClient, prompter: &'a mut P, out: &'a mut W) -> Self {
        Self {
            api,
            prompter,
            out,
            progress: false,
        }
    }

    /// Show a spinner on stderr while requests run.
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Main loop. Returns after option 6 or when input runs out; only
    /// console I/O failures are returned as errors.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.out, "{}", MENU)?;
            let choice = match self.read_number("Seleccione una opción")? {
                Some(n) => n,
                None => break,
            };
            match MenuOption::from_choice(choice) {
                Some(MenuOption::Exit) => {
                    writeln!(self.out, "Saliendo de la aplicación...")?;
                    break;
                }
                Some(option) => self.dispatch(option)?,
                None => writeln!(self.out, "Opción no válida. Intente nuevamente.")?,
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, option: MenuOption) -> Result<()> {
        match option {
            MenuOption::SearchByTitle => self.handle_search_by_title(),
            MenuOption::ListBooks => self.show_books(&BookQuery::all()),
            MenuOption::ListAuthors => {
                self.show_authors(&BookQuery::all(), "Autores registrados:")
            }
            MenuOption::AuthorsAliveIn => self.handle_authors_alive_in(),
            MenuOption::BooksByLanguage => self.handle_books_by_language(),
            MenuOption::Exit => Ok(()),
        }
    }

    fn handle_search_by_title(&mut self) -> Result<()> {
        let title = match self.ask("Ingrese el título o parte del título")? {
            Some(t) => t,
            None => return Ok(()),
        };
        match BookQuery::by_title(&title) {
            Ok(query) => self.show_books(&query),
            Err(e) => {
                writeln!(self.out, "{}", e)?;
                Ok(())
            }
        }
    }

    fn handle_authors_alive_in(&mut self) -> Result<()> {
        let year = match self.read_number("Ingrese el año")? {
            Some(y) => y,
            None => return Ok(()),
        };
        let header = format!("Autores vivos en el año {}:", year);
        self.show_authors(&BookQuery::alive_in(year), &header)
    }

    fn handle_books_by_language(&mut self) -> Result<()> {
        let code = match self.ask("Ingrese el código del idioma (ejemplo: en, fr, es)")? {
            Some(c) => c,
            None => return Ok(()),
        };
        match BookQuery::by_language(&code) {
            Ok(query) => self.show_books(&query),
            Err(e) => {
                writeln!(self.out, "{}", e)?;
                Ok(())
            }
        }
    }

    fn show_books(&mut self, query: &BookQuery) -> Result<()> {
        let titles = self.with_spinner(|api| api.book_titles(query));
        match titles {
            Ok(titles) => write_books(&mut *self.out, &titles)?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn show_authors(&mut self, query: &BookQuery, header: &str) -> Result<()> {
        let names = self.with_spinner(|api| api.author_names(query));
        match names {
            Ok(names) => write_authors(&mut *self.out, header, &names)?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompter.read_line(prompt, &mut *self.out)
    }

    /// Keep asking until the answer parses as an integer.
    fn read_number(&mut self, prompt: &str) -> io::Result<Option<i32>> {
        loop {
            let line = match self.ask(prompt)? {
                Some(l) => l,
                None => return Ok(None),
            };
            match line.trim().parse::<i32>() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => writeln!(self.out, "{}", INVALID_NUMBER)?,
            }
        }
    }

    fn with_spinner<T>(&self, f: impl FnOnce(&ApiClient) -> T) -> T {
        if !self.progress {
            return f(self.api);
        }
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Consultando Gutendex...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        let result = f(self.api);
        spinner.finish_and_clear();
        result
    }

    fn report(&mut self, err: &ApiError) -> io::Result<()> {
        warn!(error = %err, "catalog request failed");
        writeln!(self.out, "{}", err)
    }
}

/// Print the book listing: one `- title` line per book, in order.
pub fn write_books<W: Write + ?Sized>(out: &mut W, titles: &[String]) -> io::Result<()> {
    if titles.is_empty() {
        return writeln!(out, "No se encontraron libros.");
    }
    writeln!(out, "\nLibros encontrados:")?;
    for title in titles {
        writeln!(out, "- {}", title)?;
    }
    Ok(())
}

pub fn write_authors<W: Write + ?Sized>(
    out: &mut W,
    header: &str,
    names: &BTreeSet<String>,
) -> io::Result<()> {
    writeln!(out, "\n{}", header)?;
    if names.is_empty() {
        return writeln!(out, "No se encontraron autores.");
    }
    for name in names {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}
