// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Screen navigation.
//!
//! The presentation layer expresses every move between screens as a
//! [`NavAction`]; the [`Navigator`] applies it to a stack of screens.

use serde::{Deserialize, Serialize};

/// Screens of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Splash,
    Login,
    SignUp,
    Dashboard,
    LiveAgent,
    Footages,
    Notifications,
    Profile,
}

impl Screen {
    /// Screens reachable only with a signed-in user.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Screen::Splash | Screen::Login | Screen::SignUp)
    }
}

/// A single navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Push a screen on top of the current one.
    Navigate(Screen),
    /// Return to the previous screen.
    Back,
    /// Swap the current screen without keeping it in history.
    Replace(Screen),
}

/// Stack of visited screens. Never empty.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self::starting_at(Screen::Splash)
    }

    pub fn starting_at(screen: Screen) -> Self {
        Self { stack: vec![screen] }
    }

    pub fn current(&self) -> Screen {
        // The stack always holds the root screen.
        self.stack[self.stack.len() - 1]
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Apply `action` and return the screen now shown.
    pub fn apply(&mut self, action: NavAction) -> Screen {
        match action {
            NavAction::Navigate(screen) => {
                if self.current() != screen {
                    self.stack.push(screen);
                }
            }
            NavAction::Back => {
                if self.can_go_back() {
                    self.stack.pop();
                }
            }
            NavAction::Replace(screen) => {
                let top = self.stack.len() - 1;
                self.stack[top] = screen;
            }
        }
        log::debug!("Navigation {:?} -> {:?}", action, self.current());
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_and_back() {
        let mut nav = Navigator::new();
        assert_eq!(nav.current(), Screen::Splash);

        nav.apply(NavAction::Replace(Screen::Dashboard));
        assert_eq!(nav.apply(NavAction::Navigate(Screen::LiveAgent)), Screen::LiveAgent);
        assert_eq!(nav.depth(), 2);

        assert_eq!(nav.apply(NavAction::Back), Screen::Dashboard);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_back_at_root_is_noop() {
        let mut nav = Navigator::starting_at(Screen::Login);
        assert_eq!(nav.apply(NavAction::Back), Screen::Login);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_navigate_to_current_does_not_stack() {
        let mut nav = Navigator::starting_at(Screen::Dashboard);
        nav.apply(NavAction::Navigate(Screen::Dashboard));
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_replace_after_sign_out() {
        let mut nav = Navigator::starting_at(Screen::Dashboard);
        nav.apply(NavAction::Navigate(Screen::Profile));
        nav.apply(NavAction::Replace(Screen::Login));

        assert_eq!(nav.current(), Screen::Login);
        assert_eq!(nav.depth(), 2);
    }

    #[test]
    fn test_requires_auth() {
        assert!(!Screen::Login.requires_auth());
        assert!(Screen::Notifications.requires_auth());
    }
}
