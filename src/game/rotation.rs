use super::*;
use std::collections::VecDeque;

/// Seating order as a queue. The head is the player to act; finishing a
/// turn sends the head to the tail.
#[derive(Debug, Default)]
pub struct Rotation(VecDeque<Player>);

impl Rotation {
    pub fn push(&mut self, player: Player) {
        self.0.push_back(player);
    }
    pub fn rotate(&mut self) {
        self.0.rotate_left(1.min(self.0.len()));
    }
    /// Rotate so the player at `position` becomes the head.
    pub fn rotate_by(&mut self, position: usize) {
        if !self.0.is_empty() {
            self.0.rotate_left(position % self.0.len());
        }
    }
    /// Rotate until `predicate` holds for the head. No-op if nobody matches.
    pub fn rotate_to<F>(&mut self, predicate: F)
    where
        F: Fn(&Player) -> bool,
    {
        if let Some(position) = self.0.iter().position(predicate) {
            self.rotate_by(position);
        }
    }
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl Rotation {
    pub fn head(&self) -> Option<&Player> {
        self.0.front()
    }
    pub fn head_mut(&mut self) -> Option<&mut Player> {
        self.0.front_mut()
    }
    pub fn get(&self, name: &str) -> Option<&Player> {
        self.0.iter().find(|p| p.name() == name)
    }
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.0.iter()
    }
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.0.iter_mut()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
