/// Integer displayed with `'` between groups of three digits, e.g. `1'234'567`.
pub struct NiceInt(u64);

impl NiceInt {
    pub fn from(value: impl Into<u64>) -> Self {
        Self(value.into())
    }

    pub fn from_usize(value: usize) -> Self {
        Self(value as u64)
    }
}

impl std::fmt::Display for NiceInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.0.to_string();
        let lead = match digits.len() % 3 {
            0 => 3,
            r => r,
        };
        f.write_str(&digits[..lead])?;
        for group in digits.as_bytes()[lead..].chunks(3) {
            f.write_str("'")?;
            // ASCII digits only
            f.write_str(std::str::from_utf8(group).map_err(|_| std::fmt::Error)?)?;
        }
        Ok(())
    }
}
