/// A boolean variable of the engine; variables are numbered consecutively from zero in the order
/// in which they are created.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropositionalVariable {
    index: u32,
}

impl PropositionalVariable {
    pub fn new(index: u32) -> PropositionalVariable {
        PropositionalVariable { index }
    }

    pub fn index(&self) -> u32 {
        self.index
    }
}

impl std::fmt::Display for PropositionalVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "p{}", self.index)
    }
}

impl<T> std::ops::Index<PropositionalVariable> for Vec<T> {
    type Output = T;
    fn index(&self, variable: PropositionalVariable) -> &T {
        &self[variable.index as usize]
    }
}

impl<T> std::ops::IndexMut<PropositionalVariable> for Vec<T> {
    fn index_mut(&mut self, variable: PropositionalVariable) -> &mut T {
        &mut self[variable.index as usize]
    }
}
