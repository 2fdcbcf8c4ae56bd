/// Fixed palette the section data picks its colors from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Emerald,
    Green,
    Blue,
    Purple,
    Red,
    Amber,
    Rose,
    Orange,
    Indigo,
    Teal,
}

impl Accent {
    /// (from, to) stops of the accent gradient.
    fn stops(&self) -> (&'static str, &'static str) {
        match self {
            Accent::Primary => ("#0066ff", "#0052cc"),
            Accent::Emerald => ("#10b981", "#059669"),
            Accent::Green => ("#22c55e", "#16a34a"),
            Accent::Blue => ("#3b82f6", "#2563eb"),
            Accent::Purple => ("#a855f7", "#9333ea"),
            Accent::Red => ("#ef4444", "#dc2626"),
            Accent::Amber => ("#f59e0b", "#ea580c"),
            Accent::Rose => ("#f43f5e", "#db2777"),
            Accent::Orange => ("#f97316", "#ea580c"),
            Accent::Indigo => ("#6366f1", "#4f46e5"),
            Accent::Teal => ("#14b8a6", "#0d9488"),
        }
    }

    pub fn gradient(&self) -> String {
        let (from, to) = self.stops();
        format!("background: linear-gradient(to bottom right, {}, {});", from, to)
    }

    /// Pale tinted card background with a matching border.
    pub fn tint(&self) -> &'static str {
        match self {
            Accent::Primary | Accent::Blue => "background: #eff6ff; border-color: #bfdbfe;",
            Accent::Emerald | Accent::Green | Accent::Teal => "background: #ecfdf5; border-color: #a7f3d0;",
            Accent::Purple | Accent::Indigo => "background: #faf5ff; border-color: #e9d5ff;",
            Accent::Red | Accent::Rose => "background: #fef2f2; border-color: #fecaca;",
            Accent::Amber | Accent::Orange => "background: #fffbeb; border-color: #fde68a;",
        }
    }

    pub fn ink(&self) -> String {
        format!("color: {};", self.stops().1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_uses_both_stops() {
        assert_eq!(
            Accent::Emerald.gradient(),
            "background: linear-gradient(to bottom right, #10b981, #059669);"
        );
        assert_eq!(Accent::Purple.ink(), "color: #9333ea;");
    }
}
