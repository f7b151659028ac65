//! Subcommand execution and output formatting.

use std::io::Write;

use anyhow::Result;
use todo_core::{ApiError, CreateItem, Item, ItemClient, ItemId, UpdateItem};

use crate::cli::Command;
use crate::transport::Transport;

pub struct Runner<'a> {
    client: &'a ItemClient,
    transport: &'a Transport,
}

impl<'a> Runner<'a> {
    pub fn new(client: &'a ItemClient, transport: &'a Transport) -> Self {
        Self { client, transport }
    }

    pub fn run(&self, command: Command, out: &mut impl Write) -> Result<()> {
        match command {
            Command::List => {
                let mut items = self.list()?;
                if items.is_empty() {
                    writeln!(out, "No {} yet", self.client.kind())?;
                }
                sort_for_display(&mut items);
                for item in &items {
                    writeln!(out, "{}", render_item(item))?;
                }
            }
            Command::Show { id } => {
                let item = self.get(id)?;
                writeln!(out, "{}", render_item(&item))?;
            }
            Command::Add { title } => {
                let input = CreateItem {
                    title: join_title(&title),
                };
                let req = self.client.build_create_item(&input)?;
                let item = self
                    .client
                    .parse_create_item(self.transport.execute(req)?)
                    .map_err(|e| self.describe(e, None))?;
                writeln!(out, "{}", render_item(&item))?;
            }
            Command::Done { id } => self.replace(id, out, |item| completion_update(item, true))?,
            Command::Undo { id } => self.replace(id, out, |item| completion_update(item, false))?,
            Command::Rename { id, title } => {
                let title = join_title(&title);
                self.replace(id, out, |item| UpdateItem {
                    title,
                    completed: item.completed,
                })?
            }
            Command::Rm { id } => {
                let response = self.transport.execute(self.client.build_delete_item(id))?;
                self.client
                    .parse_delete_item(response)
                    .map_err(|e| self.describe(e, Some(id)))?;
                writeln!(out, "Deleted {} {id}", self.client.kind().label())?;
            }
        }
        Ok(())
    }

    fn list(&self) -> Result<Vec<Item>> {
        let response = self.transport.execute(self.client.build_list_items())?;
        self.client
            .parse_list_items(response)
            .map_err(|e| self.describe(e, None))
    }

    fn get(&self, id: ItemId) -> Result<Item> {
        let response = self.transport.execute(self.client.build_get_item(id))?;
        self.client
            .parse_get_item(response)
            .map_err(|e| self.describe(e, Some(id)))
    }

    /// Fetch the item, derive the replacement, and PUT it back.
    fn replace(
        &self,
        id: ItemId,
        out: &mut impl Write,
        change: impl FnOnce(&Item) -> UpdateItem,
    ) -> Result<()> {
        let current = self.get(id)?;
        let req = self.client.build_update_item(id, &change(&current))?;
        let updated = self
            .client
            .parse_update_item(self.transport.execute(req)?)
            .map_err(|e| self.describe(e, Some(id)))?;
        writeln!(out, "{}", render_item(&updated))?;
        Ok(())
    }

    fn describe(&self, error: ApiError, id: Option<ItemId>) -> anyhow::Error {
        let label = self.client.kind().label();
        match (&error, id) {
            (ApiError::NotFound, Some(id)) => {
                anyhow::Error::new(error).context(format!("{label} {id} not found"))
            }
            (ApiError::Validation(errors), _) => {
                let message = validation_lines(errors.iter().map(|e| e.msg.as_str()));
                anyhow::Error::new(error).context(message)
            }
            _ => anyhow::Error::new(error).context(format!("{label} request failed")),
        }
    }
}

/// Incomplete items first, each group ordered by id.
pub fn sort_for_display(items: &mut [Item]) {
    items.sort_by_key(|item| (item.completed, item.id));
}

pub fn render_item(item: &Item) -> String {
    let mark = if item.completed { 'x' } else { ' ' };
    format!("[{mark}] {} {}", item.id, item.title)
}

pub fn join_title(words: &[String]) -> String {
    words.join(" ")
}

pub fn completion_update(item: &Item, completed: bool) -> UpdateItem {
    UpdateItem {
        title: item.title.clone(),
        completed,
    }
}

fn validation_lines<'m>(messages: impl Iterator<Item = &'m str>) -> String {
    messages.collect::<Vec<_>>().join("\n")
}

/// Run a command against the server and write its output to stdout.
pub fn execute(client: &ItemClient, transport: &Transport, command: Command) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    Runner::new(client, transport).run(command, &mut out)
}
