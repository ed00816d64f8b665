//! Structures of the sample grammar.

use structura_lib::{Matcher, Structure, begin_end, opt, sta, star, sub};
use structura_lib::{alt, seq};

use crate::statements::*;

/// Declare a unit struct named after the structure it implements.
macro_rules! structure {
    ($(#[$meta:meta])* $name:ident => $body:expr) => {
        $(#[$meta])*
        pub struct $name;

        impl Structure for $name {
            fn name(&self) -> &'static str {
                stringify!($name)
            }

            fn matcher(&self) -> Matcher {
                $body
            }
        }
    };
}

structure! {
    /// A whole program: statements, subroutines and classes in any order.
    Any => star(alt!(
        sub(&Normal),
        sub(&Form),
        sub(&ClassDefinition),
        sub(&ClassImplementation),
    ))
}

structure! {
    /// One statement or one nested block.
    Normal => alt!(
        sta(DATA),
        sta(WRITE),
        sta(MOVE),
        sta(CALL),
        sta(CLEAR),
        sub(&If),
        sub(&While),
        sub(&Do),
        sub(&Loop),
        sub(&Case),
        sta(UNKNOWN),
    )
}

structure! {
    Body => star(sub(&Normal))
}

structure! {
    /// `IF`, any number of `ELSEIF` branches, an optional `ELSE`, `ENDIF`.
    If => seq!(
        sta(IF),
        opt(sub(&Body)),
        star(sub(&ElseIf)),
        opt(sub(&Else)),
        sta(END_IF),
    )
}

structure! {
    ElseIf => seq!(sta(ELSE_IF), opt(sub(&Body)))
}

structure! {
    Else => seq!(sta(ELSE), opt(sub(&Body)))
}

structure! {
    While => begin_end(sta(WHILE), opt(sub(&Body)), sta(END_WHILE))
}

structure! {
    Do => begin_end(sta(DO), opt(sub(&Body)), sta(END_DO))
}

structure! {
    Loop => begin_end(sta(LOOP), opt(sub(&Body)), sta(END_LOOP))
}

structure! {
    Case => begin_end(sta(CASE), star(sub(&When)), sta(END_CASE))
}

structure! {
    When => seq!(sta(WHEN), opt(sub(&Body)))
}

structure! {
    Form => begin_end(sta(FORM), opt(sub(&Body)), sta(END_FORM))
}

structure! {
    /// Class definition part: sections, method declarations and attributes.
    ClassDefinition => begin_end(
        sta(CLASS_DEFINITION),
        star(alt!(
            sta(PUBLIC_SECTION),
            sta(PROTECTED_SECTION),
            sta(PRIVATE_SECTION),
            sta(METHOD_DEF),
            sta(DATA),
        )),
        sta(END_CLASS),
    )
}

structure! {
    ClassImplementation => begin_end(
        sta(CLASS_IMPLEMENTATION),
        star(sub(&Method)),
        sta(END_CLASS),
    )
}

structure! {
    Method => begin_end(sta(METHOD), opt(sub(&Body)), sta(END_METHOD))
}
