//! Logical input actions and their physical key bindings.
//!
//! A game never asks "is W held?".  It asks "is `MoveForward` active?" and
//! the [`binding::BindingTable`] answers by looking at whichever keys the
//! player bound to that action.  Each action has two binding slots
//! (primary and secondary), and each slot names a device class plus a
//! device-native key code.

pub mod action;
pub mod binding;
pub mod device;
