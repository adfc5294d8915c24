/// The keys the form surfaces react to. `Terminal::read_event` folds raw
/// terminal input down to these and drops everything else, so widgets and
/// the app never see modifier state or unused key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Enter,
    Esc,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
}
