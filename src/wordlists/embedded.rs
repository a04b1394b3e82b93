//! Embedded seed word list
//!
//! A fixed list of common Portuguese five-letter words, used as a fallback
//! dictionary for testing and demo runs without file I/O. Entries are kept
//! uppercase as curated; the table builder lowercases on ingest.

/// Fixed Portuguese seed dictionary (37 words)
pub const SEED_WORDS: &[&str] = &[
    "MUNDO", "OUVIR", "AMIGO", "FELIZ", "AJUDA", "FONTE", "MURAL", "PAPEL", "VENDA", "OLHAR",
    "PORTA", "RAMAL", "ZELAR", "VIDEO", "RADAR", "FALAR", "ONDAS", "LIVRE", "NIVEL", "CANAL",
    "MUDAR", "LIGAR", "BOTAO", "PRATA", "LEADS", "PONTE", "TOTAL", "OLHOS", "BOLHA", "VALOR",
    "VISAO", "ROLHA", "IDEIA", "UNICO", "UNIAO", "CRIAR", "LIDER",
];

/// Number of words in [`SEED_WORDS`]
pub const SEED_WORDS_COUNT: usize = 37;
