#[derive(Debug, PartialEq, Eq, Clone)]
pub struct MesonModel {
    pub driver: String,
    pub warnlevel: u8,
}
