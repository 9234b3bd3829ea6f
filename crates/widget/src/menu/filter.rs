//! Type-ahead search among the items of the active menu
use crate::core::Shell;
use crate::core::time::Instant;
use crate::menu::tree::NodeKey;
use crate::menu::widget::{Menu, Origin};

impl<Message> Menu<Message>
where
    Message: Clone,
{
    /// Focuses the first item of the active menu whose text starts with the
    /// characters typed so far, ignoring case.
    ///
    /// Typing the same character again moves to the next match. The typed
    /// prefix is kept while several items match, until the filter timeout
    /// elapses.
    pub fn type_ahead(&mut self, character: char, now: Instant, shell: &mut Shell<'_, Message>) {
        // An expired prefix must not be continued
        self.tick(now, shell);

        let _ = self.state.filter_task.cancel();

        let character: String = character.to_lowercase().collect();
        let previous = self.state.filter.take().unwrap_or_default();
        let repeated = previous == character;

        let mut prefix = if repeated {
            character.clone()
        } else {
            previous + &character
        };

        let mut matches = self.matching(&prefix);

        // Continue from the active item, wrapping around
        if repeated
            && let Some(index) = self
                .state
                .active
                .and_then(|active| matches.iter().position(|item| *item == active))
        {
            matches.rotate_left(index + 1);
        }

        if matches.is_empty() {
            prefix = character;
            matches = self.matching(&prefix);
        }

        let Some(first) = matches.first().copied() else {
            log::trace!("menu {}: nothing matches {prefix:?}", self.id);
            return;
        };

        log::trace!("menu {}: {} items match {prefix:?}", self.id, matches.len());

        self.focus(first, Origin::Keyboard, now, shell);

        if matches.len() > 1 {
            self.state.filter = Some(prefix);

            let _ = self
                .state
                .filter_task
                .schedule(now, self.settings.filter_timeout, ());

            self.request_redraw(shell);
        }
    }

    /// Returns the prefix currently buffered for type-ahead search.
    pub fn filter(&self) -> Option<&str> {
        self.state.filter.as_deref()
    }

    fn matching(&self, prefix: &str) -> Vec<NodeKey> {
        self.items(self.state.active_menu)
            .into_iter()
            .filter(|item| {
                self.tree.nodes[*item]
                    .text
                    .trim_start()
                    .to_lowercase()
                    .starts_with(prefix)
            })
            .collect()
    }
}
