//! Словарно-суффиксный анализатор русского языка
//!
//! Закрытые классы слов (предлоги, союзы, частицы и т.д.) разбираются
//! по словарю, открытые классы — по суффиксным правилам. Нормальная
//! форма строится усечением окончания. Анализатор намеренно простой:
//! любую реализацию [`MorphAnalyzer`] можно подставить вместо него,
//! не трогая конвейер извлечения признаков.

use crate::models::{Morph, PosTag};
use crate::morph::MorphAnalyzer;
use std::collections::HashMap;

/// Предлоги
const PREPOSITIONS: &[&str] = &[
    "в", "во", "на", "с", "со", "по", "за", "к", "ко", "у", "о", "об", "обо",
    "от", "ото", "до", "из", "изо", "без", "безо", "под", "подо", "над",
    "надо", "при", "про", "для", "через", "между", "перед", "передо",
    "около", "вокруг", "среди", "против", "вдоль", "кроме", "ради",
    "сквозь", "вследствие", "благодаря", "согласно", "вопреки",
];

/// Союзы
const CONJUNCTIONS: &[&str] = &[
    "и", "а", "но", "да", "или", "либо", "что", "чтобы", "как", "когда",
    "если", "хотя", "хоть", "пока", "едва", "словно", "будто", "зато",
    "однако", "тоже", "также", "причём", "притом", "поскольку", "ибо",
    "нежели",
];

/// Частицы
const PARTICLES: &[&str] = &[
    "не", "ни", "же", "ж", "бы", "б", "ли", "ль", "вот", "вон", "даже",
    "лишь", "только", "уже", "уж", "ведь", "разве", "неужели", "именно",
    "почти", "пусть", "пускай", "мол", "дескать", "якобы",
];

/// Местоимения
const PRONOUNS: &[&str] = &[
    "я", "ты", "он", "она", "оно", "мы", "вы", "они", "себя", "кто",
    "никто", "некто", "ничто", "нечто", "меня", "мне", "мной", "тебя",
    "тебе", "тобой", "его", "него", "ему", "нему", "им", "ним", "её",
    "неё", "ей", "ней", "ею", "нас", "нам", "нами", "вас", "вам", "вами",
    "их", "них", "ими", "ними", "кого", "кому", "кем", "чего", "чему",
    "чем", "себе", "собой",
];

/// Предикативы
const PREDICATIVES: &[&str] = &[
    "нельзя", "можно", "жаль", "пора", "лень", "охота", "недосуг", "стыдно",
];

/// Междометия
const INTERJECTIONS: &[&str] = &[
    "ах", "ох", "эх", "ой", "ай", "эй", "увы", "ура", "алло", "браво",
    "господи", "батюшки",
];

/// Числительные
const NUMERALS: &[&str] = &[
    "один", "одна", "одно", "два", "две", "три", "четыре", "пять", "шесть",
    "семь", "восемь", "девять", "десять", "одиннадцать", "двенадцать",
    "двадцать", "тридцать", "сорок", "пятьдесят", "сто", "двести",
    "тысяча", "оба", "обе", "двое", "трое", "четверо",
];

/// Наречия
const ADVERBS: &[&str] = &[
    "очень", "всегда", "никогда", "сейчас", "теперь", "здесь", "там",
    "тут", "туда", "сюда", "везде", "нигде", "дома", "вчера", "сегодня",
    "завтра", "потом", "снова", "опять", "вместе", "вдруг", "почему",
    "зачем", "поэтому", "совсем", "слишком", "давно", "рядом", "иногда",
];

/// Компаративы
const COMPARATIVES: &[&str] = &[
    "лучше", "хуже", "больше", "меньше", "выше", "ниже", "раньше", "позже",
    "дальше", "ближе", "старше", "моложе", "быстрее", "медленнее",
];

/// Краткие прилагательные
const SHORT_ADJECTIVES: &[&str] = &[
    "рад", "рада", "рады", "готов", "готова", "готовы", "должен", "должна",
    "должны", "нужен", "нужна", "нужны", "похож", "похожа", "похожи",
];

/// Суффиксы причастий (проверяются раньше прилагательных)
const PARTICIPLE_SUFFIXES: &[&str] = &[
    "ущий", "ющий", "ащий", "ящий", "вший", "ущая", "ющая", "ащая", "ящая",
    "вшая", "ущее", "ющее", "ащее", "ящее", "вшее", "ущие", "ющие", "ащие",
    "ящие", "вшие", "емый", "имый", "нный", "нная", "нное", "нные", "тый",
    "тая", "тое", "тые",
];

/// Суффиксы кратких причастий
const SHORT_PARTICIPLE_SUFFIXES: &[&str] = &[
    "ена", "ено", "ены", "ана", "ано", "аны", "ята", "ято", "яты",
];

/// Суффиксы деепричастий
const GERUND_SUFFIXES: &[&str] = &["вшись", "вши", "учи", "ючи", "ав", "яв"];

/// Суффиксы инфинитивов
const INFINITIVE_SUFFIXES: &[&str] = &["ться", "тись", "ть", "ти", "чь"];

/// Суффиксы личных форм глагола: настоящее/будущее время
const VERB_PRESENT_SUFFIXES: &[&str] = &[
    "ешь", "ёшь", "ишь", "ете", "ёте", "ите", "ет", "ёт", "ит", "ут", "ют",
    "ат", "ят",
];

/// Суффиксы личных форм глагола: прошедшее время
const VERB_PAST_SUFFIXES: &[&str] = &[
    "ала", "яла", "ела", "ила", "али", "яли", "ели", "или", "ало", "яло",
    "ело", "ило", "ал", "ял", "ел", "ил",
];

/// Суффиксы полных прилагательных
const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ого", "его", "ому", "ему", "ыми", "ими", "ый", "ий", "ой", "ая", "яя",
    "ое", "ее", "ые", "ие", "ую", "юю", "ых", "их",
];

/// Падежные окончания существительных, усекаемые при лемматизации
const NOUN_ENDINGS: &[&str] = &[
    "ами", "ями", "ов", "ев", "ёв", "ей", "ам", "ям", "ах", "ях", "ом",
    "ем", "ой", "ою", "у", "ю", "ы", "и",
];

/// Словарно-суффиксный морфологический анализатор
#[derive(Debug, Clone)]
pub struct RuMorphAnalyzer {
    /// Слова закрытых классов: слово -> часть речи
    closed_class: HashMap<&'static str, PosTag>,
}

impl RuMorphAnalyzer {
    /// Создать анализатор со встроенными словарями
    pub fn new() -> Self {
        let mut closed_class = HashMap::new();

        let tables: [(&[&str], PosTag); 9] = [
            (PREPOSITIONS, PosTag::Prep),
            (CONJUNCTIONS, PosTag::Conj),
            (PARTICLES, PosTag::Prcl),
            (PRONOUNS, PosTag::Npro),
            (PREDICATIVES, PosTag::Pred),
            (INTERJECTIONS, PosTag::Intj),
            (NUMERALS, PosTag::Numr),
            (ADVERBS, PosTag::Advb),
            (COMPARATIVES, PosTag::Comp),
        ];

        for (words, pos) in tables {
            for word in words {
                closed_class.entry(*word).or_insert(pos);
            }
        }

        for word in SHORT_ADJECTIVES {
            closed_class.entry(*word).or_insert(PosTag::Adjs);
        }

        Self { closed_class }
    }

    /// Русское ли это слово: только кириллица и дефис
    fn is_russian_word(word: &str) -> bool {
        !word.is_empty()
            && word.chars().any(|c| c.is_alphabetic())
            && word
                .chars()
                .all(|c| matches!(c, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё' | '-'))
    }

    /// Определить часть речи открытого класса по суффиксу
    fn pos_by_suffix(word: &str) -> PosTag {
        let ends_with_any = |suffixes: &[&str]| suffixes.iter().any(|s| word.ends_with(s));

        if ends_with_any(PARTICIPLE_SUFFIXES) {
            PosTag::Prtf
        } else if ends_with_any(GERUND_SUFFIXES) {
            PosTag::Grnd
        } else if ends_with_any(INFINITIVE_SUFFIXES) {
            PosTag::Infn
        } else if ends_with_any(VERB_PRESENT_SUFFIXES) || ends_with_any(VERB_PAST_SUFFIXES) {
            PosTag::Verb
        } else if ends_with_any(SHORT_PARTICIPLE_SUFFIXES) {
            PosTag::Prts
        } else if ends_with_any(ADJECTIVE_SUFFIXES) {
            PosTag::Adjf
        } else {
            PosTag::Noun
        }
    }

    /// Усечь суффикс, если остаётся основа хотя бы из двух букв
    fn strip_suffix(word: &str, suffixes: &[&str]) -> Option<String> {
        for suffix in suffixes {
            if let Some(stem) = word.strip_suffix(suffix) {
                if stem.chars().count() >= 2 {
                    return Some(stem.to_string());
                }
            }
        }
        None
    }

    /// Построить нормальную форму слова по его части речи
    fn lemmatize(word: &str, pos: PosTag) -> String {
        match pos {
            PosTag::Adjf => Self::strip_suffix(word, ADJECTIVE_SUFFIXES)
                .map(|stem| stem + "ый")
                .unwrap_or_else(|| word.to_string()),
            PosTag::Verb => {
                // Прошедшее время: усекается только "л"-часть, гласная
                // основы сохраняется (читала -> читать)
                if let Some(stem) = Self::strip_suffix(word, &["ла", "ло", "ли", "л"]) {
                    stem + "ть"
                } else if let Some(stem) = Self::strip_suffix(word, VERB_PRESENT_SUFFIXES) {
                    stem + "ть"
                } else {
                    word.to_string()
                }
            }
            PosTag::Noun => Self::strip_suffix(word, NOUN_ENDINGS)
                .unwrap_or_else(|| word.to_string()),
            _ => word.to_string(),
        }
    }
}

impl Default for RuMorphAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl MorphAnalyzer for RuMorphAnalyzer {
    fn resolve(&self, token: &str) -> Morph {
        let lower = token.to_lowercase();

        // Пунктуация, числа и иноязычные слова не разбираются
        if !Self::is_russian_word(&lower) {
            return Morph {
                pos: None,
                normal_form: lower,
            };
        }

        if let Some(&pos) = self.closed_class.get(lower.as_str()) {
            return Morph {
                pos: Some(pos),
                normal_form: lower,
            };
        }

        let pos = Self::pos_by_suffix(&lower);
        let normal_form = Self::lemmatize(&lower, pos);

        Morph {
            pos: Some(pos),
            normal_form,
        }
    }

    fn pos_tags(&self) -> &[PosTag] {
        &PosTag::ALL
    }
}
