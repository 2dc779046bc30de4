/// Direction of a quarter-turn rotation.
#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub enum RotationDir {
    Clockwise,
    CounterClockwise,
}
