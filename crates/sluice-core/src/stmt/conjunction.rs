/// How the members of a [`QueryGroup`](super::QueryGroup) combine.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conjunction {
    #[default]
    And,
    Or,
}

impl Conjunction {
    pub fn sql_text(self) -> &'static str {
        match self {
            Conjunction::And => "AND",
            Conjunction::Or => "OR",
        }
    }
}
