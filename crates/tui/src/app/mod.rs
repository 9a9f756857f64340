use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use engine::{Formatter, Ledger, LedgerStore, Summary, Transaction};

use crate::{
    error::{AppError, Result},
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

pub type AppLedger = Ledger<Box<dyn LedgerStore>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Description,
    Amount,
}

#[derive(Debug, Default)]
pub struct FormState {
    pub description: String,
    pub amount: String,
    pub focus: FormField,
}

impl FormState {
    fn active_field_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Description => &mut self.description,
            FormField::Amount => &mut self.amount,
        }
    }

    fn clear(&mut self) {
        self.description.clear();
        self.amount.clear();
        self.focus = FormField::Description;
    }
}

pub struct App {
    ledger: AppLedger,
    pub formatter: Formatter,
    pub form: FormState,
    pub selected: usize,
    should_quit: bool,
}

impl App {
    pub fn new(ledger: AppLedger, formatter: Formatter) -> Self {
        Self {
            ledger,
            formatter,
            form: FormState::default(),
            selected: 0,
            should_quit: false,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    /// Recomputed on every call; the ledger is the single source of truth.
    pub fn summary(&self) -> Summary {
        self.ledger.summary()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        while !self.should_quit() {
            terminal
                .draw(|frame| ui::render(frame, self))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }

        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.handle_action(map_key(key));
    }

    pub fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::Quit => self.should_quit = true,
            AppAction::NextField => {
                self.form.focus = match self.form.focus {
                    FormField::Description => FormField::Amount,
                    FormField::Amount => FormField::Description,
                };
            }
            AppAction::Submit => self.submit(),
            AppAction::Backspace => {
                self.form.active_field_mut().pop();
            }
            AppAction::Delete => self.delete_selected(),
            AppAction::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            AppAction::Down => {
                if self.selected + 1 < self.ledger.len() {
                    self.selected += 1;
                }
            }
            AppAction::Input(ch) => self.form.active_field_mut().push(ch),
            AppAction::None => {}
        }
    }

    /// Invalid input is ignored on purpose: the fields keep their text and no
    /// message is shown.
    fn submit(&mut self) {
        if self
            .ledger
            .add(&self.form.description, &self.form.amount)
            .is_ok()
        {
            self.form.clear();
            self.selected = 0;
        }
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.ledger.transactions().get(self.selected).map(|tx| tx.id) else {
            return;
        };
        self.ledger.remove(id);
        self.selected = self.selected.min(self.ledger.len().saturating_sub(1));
    }
}
