//! # Menu Loop
//!
//! The interactive state machine: one menu state, looping until exit.
//!
//! ## Loop Shape
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │   print menu ──► read token ──► dispatch ──► print result  │
//! │        ▲                                          │        │
//! │        └──────────────────────────────────────────┘        │
//! │                                                            │
//! │   exit: option 0, or end of input                          │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Input is read as whitespace-delimited tokens, like the terminal dialogue
//! it implements: one token selects the option, and options 2/7 consume one
//! more token as the product name. A token that is not a valid option is
//! consumed and reported, so bad input can never wedge the loop.
//!
//! The loop is generic over `BufRead`/`Write`; tests drive it with in-memory
//! buffers and assert on the transcript.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use storefront_core::{Cart, Inventory};
use tracing::{debug, info, warn};

// =============================================================================
// Token Reader
// =============================================================================

/// Whitespace-delimited token reader over any `BufRead`.
///
/// Buffers one line at a time; `next()` returns `Ok(None)` at end of input.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Tokens {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}

// =============================================================================
// Menu Choices
// =============================================================================

/// One decoded menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    ShowInventory,
    AddToCart,
    ShowCart,
    CartTotal,
    Purchase,
    Recommend,
    FindProduct,
    Exit,
    /// Anything else: out-of-range numbers and non-numeric tokens alike.
    Invalid,
}

impl Choice {
    /// Decodes a raw input token.
    ///
    /// The token is already consumed by the caller, so an unparseable one
    /// costs exactly one "invalid option" line and nothing more.
    fn from_token(token: &str) -> Choice {
        match token.parse::<i64>() {
            Ok(1) => Choice::ShowInventory,
            Ok(2) => Choice::AddToCart,
            Ok(3) => Choice::ShowCart,
            Ok(4) => Choice::CartTotal,
            Ok(5) => Choice::Purchase,
            Ok(6) => Choice::Recommend,
            Ok(7) => Choice::FindProduct,
            Ok(0) => Choice::Exit,
            _ => Choice::Invalid,
        }
    }
}

// =============================================================================
// The Loop
// =============================================================================

/// Runs the interactive session until exit or end of input.
///
/// Owns the inventory and the cart for the whole session; the cart holds
/// only handles into the inventory, so every menu action goes through the
/// catalog for display and pricing.
pub fn run<R: BufRead, W: Write>(input: R, mut out: W, inventory: Inventory) -> io::Result<()> {
    let mut tokens = Tokens::new(input);
    let mut cart = Cart::new();

    info!(products = inventory.len(), "session started");

    loop {
        print_menu(&mut out)?;

        let Some(token) = tokens.next()? else {
            // End of input behaves like an explicit exit.
            writeln!(out, "La revedere!")?;
            break;
        };

        match Choice::from_token(&token) {
            Choice::ShowInventory => {
                writeln!(out, "Inventarul contine urmatoarele produse:")?;
                for product in inventory.iter() {
                    writeln!(out, "{product}")?;
                }
            }
            Choice::AddToCart => {
                write!(out, "Introduceti numele produsului: ")?;
                out.flush()?;
                let Some(name) = tokens.next()? else {
                    writeln!(out, "La revedere!")?;
                    break;
                };
                match inventory.find_by_name(&name) {
                    Ok(id) => {
                        debug!(name = %name, "added to cart");
                        writeln!(out, "Produs adaugat in cos: {}", inventory[id])?;
                        cart.add(id);
                    }
                    Err(err) => {
                        debug!(name = %err.missing_name(), "lookup failed");
                        writeln!(out, "{err}")?;
                    }
                }
            }
            Choice::ShowCart => {
                writeln!(out, "Cosul de cumparaturi contine urmatoarele produse:")?;
                for product in cart.products(&inventory) {
                    writeln!(out, "{product}")?;
                }
                writeln!(out, "Total: {}", cart.total(&inventory))?;
            }
            Choice::CartTotal => {
                writeln!(out, "Total cos: {}", cart.total(&inventory))?;
            }
            Choice::Purchase => {
                debug!(entries = cart.len(), "cart purchased");
                cart.clear();
                writeln!(out, "Produsele au fost cumparate. Cosul a fost golit.")?;
            }
            Choice::Recommend => match inventory.recommend() {
                Some(id) => {
                    writeln!(out, "Produsul recomandat este: {}", inventory[id])?;
                }
                None => {
                    writeln!(out, "Nu exista produse in inventar.")?;
                }
            },
            Choice::FindProduct => {
                write!(out, "Introduceti numele produsului de cautat: ")?;
                out.flush()?;
                let Some(name) = tokens.next()? else {
                    writeln!(out, "La revedere!")?;
                    break;
                };
                match inventory.find_by_name(&name) {
                    Ok(id) => writeln!(out, "Produs gasit: {}", inventory[id])?,
                    Err(err) => writeln!(out, "{err}")?,
                }
            }
            Choice::Exit => {
                writeln!(out, "La revedere!")?;
                break;
            }
            Choice::Invalid => {
                warn!(token = %token, "invalid menu option");
                writeln!(out, "Optiune invalida. Incercati din nou.")?;
            }
        }
    }

    info!("session ended");
    Ok(())
}

/// Prints the menu header and options.
fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out)?;
    writeln!(out, "Bine ati venit in magazinul nostru!")?;
    writeln!(out, "1. Afiseaza inventarul")?;
    writeln!(out, "2. Adauga un produs in cos")?;
    writeln!(out, "3. Afiseaza cosul de cumparaturi")?;
    writeln!(out, "4. Calculeaza totalul cosului de cumparaturi")?;
    writeln!(out, "5. Cumpara produsele din cos")?;
    writeln!(out, "6. Recomanda un produs")?;
    writeln!(out, "7. Cauta un produs dupa nume")?;
    writeln!(out, "0. Iesire")?;
    write!(out, "Introduceti optiunea dorita: ")?;
    out.flush()
}

// =============================================================================
// Unit Tests
// =============================================================================
