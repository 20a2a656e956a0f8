macro_rules! see_jvm_spec {
    ($ch: literal) => {
        concat!(
            "See the [JVM Specification §",
            $ch,
            "](https://docs.oracle.com/javase/specs/jvms/se21/html/jvms-",
            $ch,
            ".html) for more information."
        )
    };
    ($ch: literal, $sec: literal) => {
        concat!(
            "See the [JVM Specification §",
            $ch,
            ".",
            $sec,
            "](https://docs.oracle.com/javase/specs/jvms/se21/html/jvms-",
            $ch,
            ".html#jvms-",
            $ch,
            ".",
            $sec,
            ") for more information."
        )
    };
    ($ch: literal, $sec: literal, $subsec: literal) => {
        concat!(
            "See the [JVM Specification §",
            $ch,
            ".",
            $sec,
            ".",
            $subsec,
            "](https://docs.oracle.com/javase/specs/jvms/se21/html/jvms-",
            $ch,
            ".html#jvms-",
            $ch,
            ".",
            $sec,
            ".",
            $subsec,
            ") for more information."
        )
    };
}

pub(crate) use see_jvm_spec;
