use super::GlossaryTerm;
use crate::language::Localized;

pub(super) static GLOSSARY: [GlossaryTerm; 5] = [
    GlossaryTerm {
        term: "Ijarah",
        definition: Localized::new(
            "A lease contract where one party transfers the right to use an asset to another party for an agreed period at an agreed consideration.",
            "عقد إيجار حيث ينقل طرف حق استخدام أصل إلى طرف آخر لفترة متفق عليها بمقابل متفق عليه.",
        ),
    },
    GlossaryTerm {
        term: "Murabaha",
        definition: Localized::new(
            "A sales contract where the seller expressly mentions the cost incurred on the sold commodity and sells it to another person by adding some profit.",
            "عقد بيع حيث يذكر البائع صراحةً التكلفة التي تكبدها على السلعة المباعة ويبيعها لشخص آخر بإضافة بعض الربح.",
        ),
    },
    GlossaryTerm {
        term: "Wakala",
        definition: Localized::new(
            "An agency contract where one party appoints another party to act on their behalf for a specific task.",
            "عقد وكالة حيث يعين طرف طرفًا آخر للتصرف نيابة عنه لمهمة محددة.",
        ),
    },
    GlossaryTerm {
        term: "Istisna'a",
        definition: Localized::new(
            "A contract of sale where a commodity is transacted before it comes into existence, requiring the manufacturer to make it with payment from the buyer either in advance or by installments.",
            "عقد بيع حيث يتم تداول سلعة قبل وجودها، مما يتطلب من المصنع صنعها مع دفع المشتري إما مقدمًا أو على أقساط.",
        ),
    },
    GlossaryTerm {
        term: "Sukuk",
        definition: Localized::new(
            "Islamic financial certificates, similar to bonds, that comply with Shariah law.",
            "شهادات مالية إسلامية، مشابهة للسندات، تتوافق مع الشريعة الإسلامية.",
        ),
    },
];
