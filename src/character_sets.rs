/// Check if a character is an ASCII tab or newline
pub fn is_ascii_tab_or_newline(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
}

/// Check if a byte is a C0 control or space (0x00..=0x20)
pub fn is_c0_control_or_space(b: u8) -> bool {
    b <= 0x20
}
