//! Visit category styling.

/// Display style tag for a visit category badge.
///
/// The category itself is stored as free text; only these five labels get a
/// dedicated style, everything else falls back to [`CategoryStyle::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryStyle {
    Consulta,
    Tratamento,
    Cirurgia,
    Acompanhamento,
    RelatorioSocial,
    Default,
}

impl CategoryStyle {
    /// Resolve the style for a category label.
    pub fn for_label(label: &str) -> Self {
        match label {
            "Consulta Rotineira" => CategoryStyle::Consulta,
            "Tratamento Especial" => CategoryStyle::Tratamento,
            "Cirurgia" => CategoryStyle::Cirurgia,
            "Acompanhamento" => CategoryStyle::Acompanhamento,
            "Relatório Social" => CategoryStyle::RelatorioSocial,
            _ => CategoryStyle::Default,
        }
    }

    /// CSS class used by the card renderer for the badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            CategoryStyle::Consulta => "bg-consulta",
            CategoryStyle::Tratamento => "bg-tratamento",
            CategoryStyle::Cirurgia => "bg-cirurgia",
            CategoryStyle::Acompanhamento => "bg-acompanhamento",
            CategoryStyle::RelatorioSocial => "bg-info text-dark",
            CategoryStyle::Default => "bg-secondary",
        }
    }
}
