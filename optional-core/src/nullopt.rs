/// Tag used to build, reset and compare against an empty optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Nullopt;

pub const NULLOPT: Nullopt = Nullopt;
