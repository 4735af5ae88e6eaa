//! Canonical English texts for the fixed parts of the office.
//!
//! Last resort of the resolver, so every office renders its invariant
//! sections even when no library has been loaded at all.

use crate::models::PrayerKey;

/// Keys with a built-in text.
pub const BUILTIN_KEYS: [PrayerKey; 9] = [
    PrayerKey::SIGN_OF_THE_CROSS,
    PrayerKey::CONFESSION,
    PrayerKey::GLORIA_PATRI,
    PrayerKey::BENEDICTUS,
    PrayerKey::MAGNIFICAT,
    PrayerKey::NUNC_DIMITTIS,
    PrayerKey::APOSTLES_CREED,
    PrayerKey::LORDS_PRAYER,
    PrayerKey::ST_MICHAEL,
];

const SIGN_OF_THE_CROSS: &str =
    "In the name of the Father, and of the Son, and of the Holy Spirit. Amen.";

const CONFESSION: &str = "Most merciful God, we confess that we have sinned against you \
in thought, word, and deed, by what we have done, and by what we have left undone. \
We have not loved you with our whole heart; we have not loved our neighbors as ourselves. \
We are truly sorry and we humbly repent. For the sake of your Son Jesus Christ, \
have mercy on us and forgive us; that we may delight in your will, and walk in your ways, \
to the glory of your Name. Amen.";

const GLORIA_PATRI: &str = "Glory be to the Father, and to the Son, and to the Holy Spirit: \
as it was in the beginning, is now, and ever shall be, world without end. Amen.";

const BENEDICTUS: &str = "Blessed be the Lord God of Israel; for he hath visited and redeemed \
his people, and hath raised up an horn of salvation for us in the house of his servant David; \
as he spake by the mouth of his holy prophets, which have been since the world began: \
that we should be saved from our enemies, and from the hand of all that hate us; \
to perform the mercy promised to our fathers, and to remember his holy covenant; \
the oath which he sware to our father Abraham, that he would grant unto us, \
that we being delivered out of the hand of our enemies might serve him without fear, \
in holiness and righteousness before him, all the days of our life. \
And thou, child, shalt be called the prophet of the Highest: for thou shalt go before \
the face of the Lord to prepare his ways; to give knowledge of salvation unto his people \
by the remission of their sins, through the tender mercy of our God; whereby the dayspring \
from on high hath visited us, to give light to them that sit in darkness and in the shadow \
of death, to guide our feet into the way of peace.";

const MAGNIFICAT: &str = "My soul doth magnify the Lord, and my spirit hath rejoiced in God \
my Saviour. For he hath regarded the low estate of his handmaiden: for, behold, from henceforth \
all generations shall call me blessed. For he that is mighty hath done to me great things; \
and holy is his name. And his mercy is on them that fear him from generation to generation. \
He hath shewed strength with his arm; he hath scattered the proud in the imagination of their \
hearts. He hath put down the mighty from their seats, and exalted them of low degree. \
He hath filled the hungry with good things; and the rich he hath sent empty away. \
He hath holpen his servant Israel, in remembrance of his mercy; as he spake to our fathers, \
to Abraham, and to his seed for ever.";

const NUNC_DIMITTIS: &str = "Lord, now lettest thou thy servant depart in peace, according to \
thy word: for mine eyes have seen thy salvation, which thou hast prepared before the face of \
all people; a light to lighten the Gentiles, and the glory of thy people Israel.";

const APOSTLES_CREED: &str = "I believe in God, the Father almighty, creator of heaven and earth. \
I believe in Jesus Christ, his only Son, our Lord, who was conceived by the Holy Spirit, \
born of the Virgin Mary, suffered under Pontius Pilate, was crucified, died, and was buried; \
he descended into hell. On the third day he rose again; he ascended into heaven, \
he is seated at the right hand of the Father, and he will come to judge the living and the dead. \
I believe in the Holy Spirit, the holy catholic Church, the communion of saints, \
the forgiveness of sins, the resurrection of the body, and the life everlasting. Amen.";

const LORDS_PRAYER: &str = "Our Father, who art in heaven, hallowed be thy name; \
thy kingdom come; thy will be done on earth as it is in heaven. \
Give us this day our daily bread; and forgive us our trespasses \
as we forgive those who trespass against us; and lead us not into temptation, \
but deliver us from evil. For thine is the kingdom, and the power, and the glory, \
for ever and ever. Amen.";

const ST_MICHAEL: &str = "Saint Michael the Archangel, defend us in battle. \
Be our protection against the wickedness and snares of the devil. \
May God rebuke him, we humbly pray; and do thou, O Prince of the heavenly host, \
by the power of God, cast into hell Satan and all the evil spirits \
who prowl about the world seeking the ruin of souls. Amen.";

/// Built-in English text for a key, if it is one of the fixed office texts.
pub fn builtin_text(key: &PrayerKey) -> Option<&'static str> {
    let text = match key.as_str() {
        "sign-of-the-cross" => SIGN_OF_THE_CROSS,
        "confession" => CONFESSION,
        "gloria-patri" => GLORIA_PATRI,
        "benedictus" => BENEDICTUS,
        "magnificat" => MAGNIFICAT,
        "nunc-dimittis" => NUNC_DIMITTIS,
        "apostles-creed" => APOSTLES_CREED,
        "lords-prayer" => LORDS_PRAYER,
        "st-michael" => ST_MICHAEL,
        _ => return None,
    };
    Some(text)
}
