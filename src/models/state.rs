// src/models/state.rs

use crate::common::validation::{Parsed, field_error, single_field_failure};

/// Chaves de consulta que cada unidade federativa suporta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateKeys {
    pub plate: bool,
    pub renavam: bool,
}

/// Unidade federativa e sua disponibilidade na integração.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    pub abbreviation: &'static str,
    pub full_name: &'static str,
    pub is_available: bool,
    pub keys: StateKeys,
}

const BOTH_KEYS: StateKeys = StateKeys { plate: true, renavam: true };

/// Tabela fixa das 27 unidades federativas. A disponibilidade acompanha a
/// cobertura atual da API; estados indisponíveis existem na tabela mas são
/// recusados como entrada.
pub const STATES: [State; 27] = [
    State { abbreviation: "AC", full_name: "Acre", is_available: false, keys: BOTH_KEYS },
    State { abbreviation: "AL", full_name: "Alagoas", is_available: true, keys: BOTH_KEYS },
    State { abbreviation: "AP", full_name: "Amapá", is_available: false, keys: BOTH_KEYS },
    State { abbreviation: "AM", full_name: "Amazonas", is_available: false, keys: BOTH_KEYS },
    State {
        abbreviation: "BA",
        full_name: "Bahia",
        is_available: true,
        keys: StateKeys { plate: false, renavam: true },
    },
    State { abbreviation: "CE", full_name: "Ceará", is_available: true, keys: BOTH_KEYS },
    State { abbreviation: "DF", full_name: "Distrito Federal", is_available: true, keys: BOTH_KEYS },
    State { abbreviation: "ES", full_name: "Espírito Santo", is_available: true, keys: BOTH_KEYS },
    State { abbreviation: "GO", full_name: "Goiás", is_available: true, keys: BOTH_KEYS },
    State { abbreviation: "MA", full_name: "Maranhão", is_available: false, keys: BOTH_KEYS },
    State { abbreviation: "MT", full_name: "Mato Grosso", is_available: true, keys: BOTH_KEYS },
    State { abbreviation: "MS", full_name: "Mato Grosso do Sul", is_available: true, keys: BOTH_KEYS },
    State { abbreviation: "MG", full_name: "Minas Gerais", is_available: true, keys: BOTH_KEYS },
    State { abbreviation: "PA", full_name: "Pará", is_available: false, keys: BOTH_KEYS },
    State { abbreviation: "PB", full_name: "Paraíba", is_available: true, keys: BOTH_KEYS },
    State { abbreviation: "PR", full_name: "Paraná", is_available: true, keys: BOTH_KEYS },
    State { abbreviation: "PE", full_name: "Pernambuco", is_available: false, keys: BOTH_KEYS },
    State { abbreviation: "PI", full_name: "Piauí", is_available: true, keys: BOTH_KEYS },
    State { abbreviation: "RJ", full_name: "Rio de Janeiro", is_available: true, keys: BOTH_KEYS },
    State { abbreviation: "RN", full_name: "Rio Grande do Norte", is_available: true, keys: BOTH_KEYS },
    State { abbreviation: "RS", full_name: "Rio Grande do Sul", is_available: true, keys: BOTH_KEYS },
    State { abbreviation: "RO", full_name: "Rondônia", is_available: false, keys: BOTH_KEYS },
    State { abbreviation: "RR", full_name: "Roraima", is_available: false, keys: BOTH_KEYS },
    State { abbreviation: "SC", full_name: "Santa Catarina", is_available: true, keys: BOTH_KEYS },
    State { abbreviation: "SP", full_name: "São Paulo", is_available: true, keys: BOTH_KEYS },
    State { abbreviation: "SE", full_name: "Sergipe", is_available: false, keys: BOTH_KEYS },
    State { abbreviation: "TO", full_name: "Tocantins", is_available: false, keys: BOTH_KEYS },
];

/// Entrada usada quando a sigla não está na tabela.
const FALLBACK_ABBREVIATION: &str = "TO";

impl State {
    fn lookup(abbreviation: &str) -> Option<&'static State> {
        STATES.iter().find(|state| state.abbreviation == abbreviation)
    }

    fn get_or_default(abbreviation: &str) -> &'static State {
        // A sigla já passou pelo conjunto de aceitação; o fallback cobre o
        // caso (hoje inalcançável) de uma sigla fora da tabela.
        Self::lookup(abbreviation).unwrap_or_else(|| {
            Self::lookup(FALLBACK_ABBREVIATION).expect("tabela de estados sem a entrada padrão")
        })
    }

    /// Aceita somente siglas de estados disponíveis, sem diferenciar caixa.
    pub fn from_raw(maybe_state: &str) -> Parsed<State> {
        let canonical = maybe_state.to_uppercase();
        let accepted = Self::available().iter().any(|state| state.abbreviation == canonical);
        if !accepted {
            return Err(single_field_failure(
                "state",
                field_error("state", maybe_state, "não é um estado disponível"),
            ));
        }
        Ok(*Self::get_or_default(&canonical))
    }

    pub fn as_raw(&self) -> &'static str {
        self.abbreviation
    }

    /// Estados atualmente atendidos pela integração.
    pub fn available() -> Vec<&'static State> {
        STATES.iter().filter(|state| state.is_available).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_available_abbreviation_resolves_to_its_record() {
        for state in State::available() {
            let parsed = State::from_raw(state.abbreviation).unwrap();
            assert_eq!(parsed, *state);
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let parsed = State::from_raw("mg").unwrap();
        assert_eq!(parsed.full_name, "Minas Gerais");
    }

    #[test]
    fn unavailable_states_are_rejected_as_input() {
        for abbreviation in ["AC", "AP", "AM", "MA", "PA", "PE", "RO", "RR", "SE", "TO"] {
            let failure = State::from_raw(abbreviation).unwrap_err();
            assert!(failure.field_errors().contains_key("state"), "{abbreviation} deveria ser recusado");
        }
    }

    #[test]
    fn unknown_abbreviations_are_rejected_as_input() {
        assert!(State::from_raw("XX").is_err());
        assert!(State::from_raw("").is_err());
    }

    #[test]
    fn registry_has_all_federative_units() {
        assert_eq!(STATES.len(), 27);
        assert_eq!(State::available().len(), 17);
        // única UF consultável apenas por renavam
        let bahia = STATES.iter().find(|s| s.abbreviation == "BA").unwrap();
        assert!(!bahia.keys.plate && bahia.keys.renavam);
    }
}
