use super::{Example, Standard, StandardId};
use crate::language::Localized;

pub(super) static STANDARDS: [Standard; 5] = [
    Standard {
        id: StandardId::Fas4,
        title: Localized::new("Currency Translation", "ترجمة العملات"),
        description: Localized::new(
            "Standard for recording foreign currency transactions and translating financial statements.",
            "معيار لتسجيل معاملات العملات الأجنبية وترجمة البيانات المالية.",
        ),
    },
    Standard {
        id: StandardId::Fas7,
        title: Localized::new("Investments in Real Estate", "الاستثمارات العقارية"),
        description: Localized::new(
            "Standard for accounting for investments in properties for rental or capital appreciation.",
            "معيار محاسبة الاستثمارات في العقارات للتأجير أو زيادة رأس المال.",
        ),
    },
    Standard {
        id: StandardId::Fas10,
        title: Localized::new(
            "Istisna'a and Parallel Istisna'a",
            "الاستصناع والاستصناع الموازي",
        ),
        description: Localized::new(
            "Standard for manufacturing contracts where payment is made in installments.",
            "معيار لعقود التصنيع حيث يتم الدفع على أقساط.",
        ),
    },
    Standard {
        id: StandardId::Fas28,
        title: Localized::new(
            "Ijarah and Ijarah Muntahia Bittamleek",
            "الإجارة والإجارة المنتهية بالتمليك",
        ),
        description: Localized::new(
            "Standard for lease agreements and leases ending with ownership transfer.",
            "معيار لاتفاقيات الإيجار والإيجارات المنتهية بنقل الملكية.",
        ),
    },
    Standard {
        id: StandardId::Fas32,
        title: Localized::new(
            "Investment Agency (Al-Wakala Bi Al-Istithmar)",
            "وكالة الاستثمار (الوكالة بالاستثمار)",
        ),
        description: Localized::new(
            "Standard for investment agency relationships between investors and agents.",
            "معيار لعلاقات وكالة الاستثمار بين المستثمرين والوكلاء.",
        ),
    },
];

pub(super) static EXAMPLES: [Example; 5] = [
    Example {
        id: StandardId::Fas4,
        title: Localized::new(
            "Converting USD to EUR for international trade",
            "تحويل الدولار الأمريكي إلى اليورو للتجارة الدولية",
        ),
        scenario: Localized::new(
            "Al Baraka Bank needs to record a transaction where they purchased machinery from a European supplier:\n\
             - Purchase price: €500,000\n\
             - Exchange rate on purchase date: 1 EUR = 1.10 USD\n\
             - Exchange rate on payment date (30 days later): 1 EUR = 1.12 USD\n\
             How should this be recorded in the books?",
            "يحتاج بنك البركة إلى تسجيل معاملة شراء آلات من مورد أوروبي:\n\
             - سعر الشراء: 500,000 يورو\n\
             - سعر الصرف في تاريخ الشراء: 1 يورو = 1.10 دولار أمريكي\n\
             - سعر الصرف في تاريخ الدفع (بعد 30 يومًا): 1 يورو = 1.12 دولار أمريكي\n\
             كيف يجب تسجيل هذا في الدفاتر؟",
        ),
    },
    Example {
        id: StandardId::Fas7,
        title: Localized::new(
            "Acquiring an office building for rental",
            "الاستحواذ على مبنى مكتبي للتأجير",
        ),
        scenario: Localized::new(
            "Islamic Finance House purchased a commercial building:\n\
             - Purchase price: $5,000,000\n\
             - Legal fees: $50,000\n\
             - Building improvements: $200,000\n\
             - Expected rental income: $400,000 per year\n\
             How should this investment be recorded and measured?",
            "اشترى بيت التمويل الإسلامي مبنى تجاري:\n\
             - سعر الشراء: 5,000,000 دولار\n\
             - الرسوم القانونية: 50,000 دولار\n\
             - تحسينات المبنى: 200,000 دولار\n\
             - الدخل المتوقع من الإيجار: 400,000 دولار سنويًا\n\
             كيف يجب تسجيل وقياس هذا الاستثمار؟",
        ),
    },
    Example {
        id: StandardId::Fas10,
        title: Localized::new(
            "Manufacturing contract for custom equipment",
            "عقد تصنيع لمعدات مخصصة",
        ),
        scenario: Localized::new(
            "Al Salam Bank entered into an Istisna'a contract with a manufacturer:\n\
             - Contract value: $1,000,000 for custom manufacturing equipment\n\
             - Payment schedule: 30% upfront, 30% halfway, 40% upon delivery\n\
             - Manufacturing period: 8 months\n\
             How should the bank record this transaction?",
            "دخل بنك السلام في عقد استصناع مع مصنّع:\n\
             - قيمة العقد: 1,000,000 دولار لمعدات تصنيع مخصصة\n\
             - جدول الدفع: 30٪ مقدمًا، 30٪ في المنتصف، 40٪ عند التسليم\n\
             - فترة التصنيع: 8 أشهر\n\
             كيف يجب على البنك تسجيل هذه المعاملة؟",
        ),
    },
    Example {
        id: StandardId::Fas28,
        title: Localized::new(
            "Leasing equipment with ownership transfer",
            "تأجير معدات مع نقل الملكية",
        ),
        scenario: Localized::new(
            "Alpha Islamic Bank entered into an Ijarah MBT for a generator:\n\
             - Generator cost: $450,000\n\
             - Import tax and freight: $42,000\n\
             - Lease term: 2 years\n\
             - Annual rental: $300,000\n\
             - Purchase option at end: $3,000\n\
             How should Alpha Bank record this transaction?",
            "دخل بنك ألفا الإسلامي في إجارة منتهية بالتمليك لمولد كهربائي:\n\
             - تكلفة المولد: 450,000 دولار\n\
             - ضريبة الاستيراد والشحن: 42,000 دولار\n\
             - مدة الإيجار: سنتان\n\
             - الإيجار السنوي: 300,000 دولار\n\
             - خيار الشراء في النهاية: 3,000 دولار\n\
             كيف يجب على بنك ألفا تسجيل هذه المعاملة؟",
        ),
    },
    Example {
        id: StandardId::Fas32,
        title: Localized::new("Investment agency relationship", "علاقة وكالة استثمار"),
        scenario: Localized::new(
            "Qatar Islamic Bank accepted $10M from investors on Wakala basis:\n\
             - Expected profit rate: 5% annually\n\
             - Bank's agency fee: 20% of profits above 5%\n\
             - Investment term: 1 year\n\
             - Actual return achieved: 7%\n\
             How should this be accounted for?",
            "قبل بنك قطر الإسلامي 10 مليون دولار من المستثمرين على أساس الوكالة:\n\
             - معدل الربح المتوقع: 5٪ سنويًا\n\
             - رسوم وكالة البنك: 20٪ من الأرباح فوق 5٪\n\
             - مدة الاستثمار: سنة واحدة\n\
             - العائد الفعلي المحقق: 7٪\n\
             كيف يجب المحاسبة عن ذلك؟",
        ),
    },
];
