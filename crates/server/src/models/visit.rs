#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitType {
    Pick,
    Create,
}

impl VisitType {
    pub fn as_str(self) -> &'static str {
        match self {
            VisitType::Pick => "Pick",
            VisitType::Create => "Create",
        }
    }
}
