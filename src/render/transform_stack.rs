use std::ops::{Deref, DerefMut};

use glam::{Mat4, Vec3};

/// Model-view matrix stack with scoped saves.
///
/// [`TransformStack::push`] returns a guard; the matrix in effect before the
/// push is restored when the guard drops, so pushes and pops always pair up.
#[derive(Debug, Clone)]
pub struct TransformStack {
    current: Mat4,
    saved: Vec<Mat4>,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY)
    }
}

impl TransformStack {
    pub fn new(base: Mat4) -> Self {
        Self {
            current: base,
            saved: Vec::new(),
        }
    }

    pub fn current(&self) -> Mat4 {
        self.current
    }

    /// Number of saves currently outstanding.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn push(&mut self) -> TransformGuard<'_> {
        self.saved.push(self.current);
        TransformGuard { stack: self }
    }

    pub fn translate(&mut self, offset: Vec3) {
        self.current *= Mat4::from_translation(offset);
    }

    pub fn scale(&mut self, factors: Vec3) {
        self.current *= Mat4::from_scale(factors);
    }

    pub fn multiply(&mut self, matrix: Mat4) {
        self.current *= matrix;
    }

    fn restore(&mut self) {
        if let Some(previous) = self.saved.pop() {
            self.current = previous;
        }
    }
}

/// Scope of one [`TransformStack::push`].
pub struct TransformGuard<'a> {
    stack: &'a mut TransformStack,
}

impl Deref for TransformGuard<'_> {
    type Target = TransformStack;

    fn deref(&self) -> &Self::Target {
        self.stack
    }
}

impl DerefMut for TransformGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.stack
    }
}

impl Drop for TransformGuard<'_> {
    fn drop(&mut self) {
        self.stack.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_restores_on_drop() {
        let mut stack = TransformStack::default();
        {
            let mut scope = stack.push();
            scope.translate(Vec3::X);
            assert_eq!(scope.depth(), 1);
            assert_ne!(scope.current(), Mat4::IDENTITY);
        }
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.current(), Mat4::IDENTITY);
    }

    #[test]
    fn nested_scopes_unwind_in_order() {
        let mut stack = TransformStack::default();
        let mut outer = stack.push();
        outer.scale(Vec3::splat(2.0));
        let after_scale = outer.current();
        {
            let mut inner = outer.push();
            inner.translate(Vec3::new(1.0, 2.0, 3.0));
            assert_eq!(inner.depth(), 2);
            assert_eq!(
                inner.current().transform_point3(Vec3::ZERO),
                Vec3::new(2.0, 4.0, 6.0)
            );
        }
        assert_eq!(outer.current(), after_scale);
        drop(outer);
        assert_eq!(stack.current(), Mat4::IDENTITY);
    }
}
