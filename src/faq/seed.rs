/// Initial FAQ content inserted on first run, when the questions table is
/// still empty.
pub struct SeedQuestion {
    pub text: &'static str,
    pub answer: &'static str,
    pub variations: &'static [&'static str],
}

pub const DEFAULT_QUESTIONS: &[SeedQuestion] = &[
    SeedQuestion {
        text: "Какие факультеты есть в университете?",
        answer: "В Политех Петра представлены:\n\n🔹 Гумманитарный институт (ЛИНГВИСТИКА, ИЗДАТЕЛЬСКОЕ ДЕЛО, РЕКЛАМА И СВЯЗИ С ОБЩЕСТВЕННОСТЬЮ, ПСИХОЛОГО-ПЕДАГОГИЧЕСКОЕ ОБРАЗОВАНИЕ, ЮРИСПРУДЕНЦИЯ, ЗАРУБЕЖНОЕ РЕГИОНОВЕДЕНИЕ )\n🔹 Инженерно-строительный институт (Дизайн архитектурной среды, Строительство, Техносферная безопасность, Дизайн, Дизайн архитектурной среды, Градостроительство,  )\n🔹 Институт биомедицинских систем и биотехнологий (Биоинженерия и биоинформатика, Биотехнические системы и технологии, Биотехнология, Продукты питания животного происхождения, Технология продукции и организация общественного питания)\n🔹Институт машиностроения, материалов и транспорта  (Машиностроение, Технологические машины и оборудование, Автоматизация технологических процессов и производств, Конструкторско-технологическое обеспечение машиностроительных производств, Мехатроника и робототехника, Материаловедение и технологии материалов, Металлургия, Технология транспортных процессов, Управление качеством, Инноватика, Нанотехнологии и микросистемная техника, Технология художественной обработки материалов, Машиностроение)\n и др. \n\nПодробнее: https://www.spbstu.ru/education/management-structure/institutions/",
        variations: &["Какие есть направления?", "Перечислите факультеты"],
    },
    SeedQuestion {
        text: "Какие проходные баллы?",
        answer: "Проходные баллы 2024 года:\n\n💻 Компьютерные науки: 245\n⚙️ Инженерные направления: 210",
        variations: &["Сколько баллов нужно?", "Минимальные баллы ЕГЭ"],
    },
];
