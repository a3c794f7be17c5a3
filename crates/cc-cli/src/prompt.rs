//! Interactive prompt loop
//!
//! A small state machine over the console session: pick a material, pick an
//! item, enter a quantity, print the raw units required. Invalid input at any
//! step returns the user to an earlier prompt instead of terminating; only
//! the quit sentinel (or end of input) ends the session.
//!
//! The session is generic over its reader and writer so tests can script a
//! whole conversation against in-memory buffers.

use std::io::{self, BufRead, Write};

use cc_types::{normalize_name, Catalog};

/// Quit sentinel accepted at the material prompt.
const QUIT: &str = "q";

#[derive(Debug, Clone, PartialEq, Eq)]
enum PromptState {
    SelectMaterial,
    SelectItem {
        material: String,
    },
    EnterQuantity {
        material: String,
        item: String,
    },
    Done,
}

/// One interactive session over a catalog.
pub struct PromptSession<'a, R, W> {
    catalog: &'a Catalog,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> PromptSession<'a, R, W> {
    pub fn new(catalog: &'a Catalog, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
        }
    }

    /// Run the session to completion.
    pub fn run(mut self) -> io::Result<()> {
        writeln!(self.output, "\n=== Raw-Material Calculator ===")?;

        let mut state = PromptState::SelectMaterial;
        while state != PromptState::Done {
            state = self.step(state)?;
        }

        Ok(())
    }

    fn step(&mut self, state: PromptState) -> io::Result<PromptState> {
        match state {
            PromptState::SelectMaterial => self.select_material(),
            PromptState::SelectItem { material } => self.select_item(material),
            PromptState::EnterQuantity { material, item } => self.enter_quantity(material, item),
            PromptState::Done => Ok(PromptState::Done),
        }
    }

    /// Read one line, normalized. `None` means end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(normalize_name(&line)))
    }

    fn select_material(&mut self) -> io::Result<PromptState> {
        writeln!(self.output, "\nAvailable raw materials:")?;
        let catalog = self.catalog;
        for name in catalog.materials() {
            writeln!(self.output, "  - {}", name)?;
        }
        writeln!(self.output)?;

        write!(self.output, "Choose a material (or 'q' to quit): ")?;
        self.output.flush()?;

        let Some(choice) = self.read_line()? else {
            return Ok(PromptState::Done);
        };

        if choice == QUIT {
            writeln!(self.output, "\nGoodbye!")?;
            return Ok(PromptState::Done);
        }

        match self.catalog.recipes_for(&choice) {
            Ok(material) => Ok(PromptState::SelectItem {
                material: material.name().to_string(),
            }),
            Err(_) => {
                writeln!(
                    self.output,
                    " -> '{}' isn't a valid material. Try again.",
                    choice
                )?;
                Ok(PromptState::SelectMaterial)
            }
        }
    }

    fn select_item(&mut self, material_name: String) -> io::Result<PromptState> {
        // The state machine only reaches here with a name taken from the
        // catalog, so the lookup cannot fail.
        let catalog = self.catalog;
        let Ok(material) = catalog.recipes_for(&material_name) else {
            return Ok(PromptState::SelectMaterial);
        };

        writeln!(self.output, "\nCraftable items for '{}':", material_name)?;
        for (item, recipe) in material.recipes() {
            writeln!(
                self.output,
                " - {:<10} (makes {:<2} at a time, costs {} raw units/batch)",
                item, recipe.batch_output, recipe.raw_per_batch
            )?;
        }
        writeln!(self.output)?;

        write!(self.output, "Enter item to craft: ")?;
        self.output.flush()?;

        let Some(item) = self.read_line()? else {
            return Ok(PromptState::Done);
        };

        if material.recipe(&item).is_err() {
            writeln!(
                self.output,
                " -> '{}' not found for material '{}'. Returning to menu.",
                item, material_name
            )?;
            return Ok(PromptState::SelectMaterial);
        }

        Ok(PromptState::EnterQuantity {
            material: material_name,
            item,
        })
    }

    fn enter_quantity(&mut self, material_name: String, item: String) -> io::Result<PromptState> {
        write!(self.output, "Quantity needed: ")?;
        self.output.flush()?;

        let Some(entry) = self.read_line()? else {
            return Ok(PromptState::Done);
        };

        let quantity = match entry.parse::<u32>() {
            Ok(quantity) if quantity > 0 => quantity,
            _ => {
                writeln!(
                    self.output,
                    " -> Quantity must be a positive integer. Starting over."
                )?;
                return Ok(PromptState::SelectMaterial);
            }
        };

        // Both names came out of the catalog earlier in the session, so this
        // only fails if the recipe data itself is inconsistent.
        let result = self
            .catalog
            .recipes_for(&material_name)
            .and_then(|material| cc_resolver::resolve(material, &item, quantity));

        match result {
            Ok(needed) => {
                writeln!(
                    self.output,
                    "\nYou need {} raw '{}' unit(s) to craft {} '{}'(s).",
                    needed, material_name, quantity, item
                )?;
            }
            Err(e) => {
                writeln!(self.output, " -> {}", e)?;
            }
        }

        Ok(PromptState::SelectMaterial)
    }
}
