// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Standard capability positions
//!
//! The legacy sections of a terminfo file store capabilities by position. The
//! order is fixed by ncurses and identical for every terminal entry, so each
//! position gets a variant named after the capability's short name.

macro_rules! capabilities {
    (
        $(#[$meta:meta])*
        $ty:ident,
        $names:ident,
        [$($cap:ident = $name:literal,)*]
    ) => {
        $(#[$meta])*
        #[allow(non_camel_case_types)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $ty {
            $($cap,)*
        }

        /// Short capability names, indexed by position
        pub const $names: &[&str] = &[$($name,)*];

        impl $ty {
            /// Every capability of the section, in file order
            pub const ALL: &[Self] = &[$(Self::$cap,)*];

            /// Position of the capability in its section
            #[must_use]
            pub const fn index(self) -> usize {
                self as usize
            }

            /// Short name of the capability, e.g. `el` or `colors`
            #[must_use]
            pub fn name(self) -> &'static str {
                $names[self.index()]
            }

            /// Find a standard capability by its short name
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                $names
                    .iter()
                    .position(|candidate| *candidate == name)
                    .map(|index| Self::ALL[index])
            }

            /// Capability at the given position, if there is a standard one
            #[must_use]
            pub fn from_index(index: usize) -> Option<Self> {
                Self::ALL.get(index).copied()
            }
        }
    };
}

capabilities! {
    /// Standard boolean capabilities
    BooleanCap,
    BOOLEAN_NAMES,
    [
        bw = "bw", am = "am", xsb = "xsb", xhp = "xhp", xenl = "xenl", eo = "eo", gn = "gn",
        hc = "hc", km = "km", hs = "hs", r#in = "in", db = "db", da = "da", mir = "mir",
        msgr = "msgr", os = "os", eslok = "eslok", xt = "xt", hz = "hz", ul = "ul", xon = "xon",
        nxon = "nxon", mc5i = "mc5i", chts = "chts", nrrmc = "nrrmc", npc = "npc", ndscr = "ndscr",
        ccc = "ccc", bce = "bce", hls = "hls", xhpa = "xhpa", crxm = "crxm", daisy = "daisy",
        xvpa = "xvpa", sam = "sam", cpix = "cpix", lpix = "lpix", OTbs = "OTbs", OTns = "OTns",
        OTnc = "OTnc", OTMT = "OTMT", OTNL = "OTNL", OTpt = "OTpt", OTxr = "OTxr",
    ]
}

capabilities! {
    /// Standard numeric capabilities
    NumberCap,
    NUMBER_NAMES,
    [
        cols = "cols", it = "it", lines = "lines", lm = "lm", xmc = "xmc", pb = "pb", vt = "vt",
        wsl = "wsl", nlab = "nlab", lh = "lh", lw = "lw", ma = "ma", wnum = "wnum",
        colors = "colors", pairs = "pairs", ncv = "ncv", bufsz = "bufsz", spinv = "spinv",
        spinh = "spinh", maddr = "maddr", mjump = "mjump", mcs = "mcs", mls = "mls",
        npins = "npins", orc = "orc", orl = "orl", orhi = "orhi", orvi = "orvi", cps = "cps",
        widcs = "widcs", btns = "btns", bitwin = "bitwin", bitype = "bitype", UTug = "UTug",
        OTdC = "OTdC", OTdN = "OTdN", OTdB = "OTdB", OTdT = "OTdT", OTkn = "OTkn",
    ]
}

capabilities! {
    /// Standard string capabilities
    StringCap,
    STRING_NAMES,
    [
        cbt = "cbt", bel = "bel", cr = "cr", csr = "csr", tbc = "tbc", clear = "clear", el = "el",
        ed = "ed", hpa = "hpa", cmdch = "cmdch", cup = "cup", cud1 = "cud1", home = "home",
        civis = "civis", cub1 = "cub1", mrcup = "mrcup", cnorm = "cnorm", cuf1 = "cuf1", ll = "ll",
        cuu1 = "cuu1", cvvis = "cvvis", dch1 = "dch1", dl1 = "dl1", dsl = "dsl", hd = "hd",
        smacs = "smacs", blink = "blink", bold = "bold", smcup = "smcup", smdc = "smdc",
        dim = "dim", smir = "smir", invis = "invis", prot = "prot", rev = "rev", smso = "smso",
        smul = "smul", ech = "ech", rmacs = "rmacs", sgr0 = "sgr0", rmcup = "rmcup", rmdc = "rmdc",
        rmir = "rmir", rmso = "rmso", rmul = "rmul", flash = "flash", ff = "ff", fsl = "fsl",
        is1 = "is1", is2 = "is2", is3 = "is3", r#if = "if", ich1 = "ich1", il1 = "il1", ip = "ip",
        kbs = "kbs", ktbc = "ktbc", kclr = "kclr", kctab = "kctab", kdch1 = "kdch1", kdl1 = "kdl1",
        kcud1 = "kcud1", krmir = "krmir", kel = "kel", ked = "ked", kf0 = "kf0", kf1 = "kf1",
        kf10 = "kf10", kf2 = "kf2", kf3 = "kf3", kf4 = "kf4", kf5 = "kf5", kf6 = "kf6", kf7 = "kf7",
        kf8 = "kf8", kf9 = "kf9", khome = "khome", kich1 = "kich1", kil1 = "kil1", kcub1 = "kcub1",
        kll = "kll", knp = "knp", kpp = "kpp", kcuf1 = "kcuf1", kind = "kind", kri = "kri",
        khts = "khts", kcuu1 = "kcuu1", rmkx = "rmkx", smkx = "smkx", lf0 = "lf0", lf1 = "lf1",
        lf10 = "lf10", lf2 = "lf2", lf3 = "lf3", lf4 = "lf4", lf5 = "lf5", lf6 = "lf6", lf7 = "lf7",
        lf8 = "lf8", lf9 = "lf9", rmm = "rmm", smm = "smm", nel = "nel", pad = "pad", dch = "dch",
        dl = "dl", cud = "cud", ich = "ich", indn = "indn", il = "il", cub = "cub", cuf = "cuf",
        rin = "rin", cuu = "cuu", pfkey = "pfkey", pfloc = "pfloc", pfx = "pfx", mc0 = "mc0",
        mc4 = "mc4", mc5 = "mc5", rep = "rep", rs1 = "rs1", rs2 = "rs2", rs3 = "rs3", rf = "rf",
        rc = "rc", vpa = "vpa", sc = "sc", ind = "ind", ri = "ri", sgr = "sgr", hts = "hts",
        wind = "wind", ht = "ht", tsl = "tsl", uc = "uc", hu = "hu", iprog = "iprog", ka1 = "ka1",
        ka3 = "ka3", kb2 = "kb2", kc1 = "kc1", kc3 = "kc3", mc5p = "mc5p", rmp = "rmp",
        acsc = "acsc", pln = "pln", kcbt = "kcbt", smxon = "smxon", rmxon = "rmxon", smam = "smam",
        rmam = "rmam", xonc = "xonc", xoffc = "xoffc", enacs = "enacs", smln = "smln",
        rmln = "rmln", kbeg = "kbeg", kcan = "kcan", kclo = "kclo", kcmd = "kcmd", kcpy = "kcpy",
        kcrt = "kcrt", kend = "kend", kent = "kent", kext = "kext", kfnd = "kfnd", khlp = "khlp",
        kmrk = "kmrk", kmsg = "kmsg", kmov = "kmov", knxt = "knxt", kopn = "kopn", kopt = "kopt",
        kprv = "kprv", kprt = "kprt", krdo = "krdo", kref = "kref", krfr = "krfr", krpl = "krpl",
        krst = "krst", kres = "kres", ksav = "ksav", kspd = "kspd", kund = "kund", kBEG = "kBEG",
        kCAN = "kCAN", kCMD = "kCMD", kCPY = "kCPY", kCRT = "kCRT", kDC = "kDC", kDL = "kDL",
        kslt = "kslt", kEND = "kEND", kEOL = "kEOL", kEXT = "kEXT", kFND = "kFND", kHLP = "kHLP",
        kHOM = "kHOM", kIC = "kIC", kLFT = "kLFT", kMSG = "kMSG", kMOV = "kMOV", kNXT = "kNXT",
        kOPT = "kOPT", kPRV = "kPRV", kPRT = "kPRT", kRDO = "kRDO", kRPL = "kRPL", kRIT = "kRIT",
        kRES = "kRES", kSAV = "kSAV", kSPD = "kSPD", kUND = "kUND", rfi = "rfi", kf11 = "kf11",
        kf12 = "kf12", kf13 = "kf13", kf14 = "kf14", kf15 = "kf15", kf16 = "kf16", kf17 = "kf17",
        kf18 = "kf18", kf19 = "kf19", kf20 = "kf20", kf21 = "kf21", kf22 = "kf22", kf23 = "kf23",
        kf24 = "kf24", kf25 = "kf25", kf26 = "kf26", kf27 = "kf27", kf28 = "kf28", kf29 = "kf29",
        kf30 = "kf30", kf31 = "kf31", kf32 = "kf32", kf33 = "kf33", kf34 = "kf34", kf35 = "kf35",
        kf36 = "kf36", kf37 = "kf37", kf38 = "kf38", kf39 = "kf39", kf40 = "kf40", kf41 = "kf41",
        kf42 = "kf42", kf43 = "kf43", kf44 = "kf44", kf45 = "kf45", kf46 = "kf46", kf47 = "kf47",
        kf48 = "kf48", kf49 = "kf49", kf50 = "kf50", kf51 = "kf51", kf52 = "kf52", kf53 = "kf53",
        kf54 = "kf54", kf55 = "kf55", kf56 = "kf56", kf57 = "kf57", kf58 = "kf58", kf59 = "kf59",
        kf60 = "kf60", kf61 = "kf61", kf62 = "kf62", kf63 = "kf63", el1 = "el1", mgc = "mgc",
        smgl = "smgl", smgr = "smgr", fln = "fln", sclk = "sclk", dclk = "dclk", rmclk = "rmclk",
        cwin = "cwin", wingo = "wingo", hup = "hup", dial = "dial", qdial = "qdial", tone = "tone",
        pulse = "pulse", hook = "hook", pause = "pause", wait = "wait", u0 = "u0", u1 = "u1",
        u2 = "u2", u3 = "u3", u4 = "u4", u5 = "u5", u6 = "u6", u7 = "u7", u8 = "u8", u9 = "u9",
        op = "op", oc = "oc", initc = "initc", initp = "initp", scp = "scp", setf = "setf",
        setb = "setb", cpi = "cpi", lpi = "lpi", chr = "chr", cvr = "cvr", defc = "defc",
        swidm = "swidm", sdrfq = "sdrfq", sitm = "sitm", slm = "slm", smicm = "smicm",
        snlq = "snlq", snrmq = "snrmq", sshm = "sshm", ssubm = "ssubm", ssupm = "ssupm",
        sum = "sum", rwidm = "rwidm", ritm = "ritm", rlm = "rlm", rmicm = "rmicm", rshm = "rshm",
        rsubm = "rsubm", rsupm = "rsupm", rum = "rum", mhpa = "mhpa", mcud1 = "mcud1",
        mcub1 = "mcub1", mcuf1 = "mcuf1", mvpa = "mvpa", mcuu1 = "mcuu1", porder = "porder",
        mcud = "mcud", mcub = "mcub", mcuf = "mcuf", mcuu = "mcuu", scs = "scs", smgb = "smgb",
        smgbp = "smgbp", smglp = "smglp", smgrp = "smgrp", smgt = "smgt", smgtp = "smgtp",
        sbim = "sbim", scsd = "scsd", rbim = "rbim", rcsd = "rcsd", subcs = "subcs",
        supcs = "supcs", docr = "docr", zerom = "zerom", csnm = "csnm", kmous = "kmous",
        minfo = "minfo", reqmp = "reqmp", getm = "getm", setaf = "setaf", setab = "setab",
        pfxl = "pfxl", devt = "devt", csin = "csin", s0ds = "s0ds", s1ds = "s1ds", s2ds = "s2ds",
        s3ds = "s3ds", smglr = "smglr", smgtb = "smgtb", birep = "birep", binel = "binel",
        bicr = "bicr", colornm = "colornm", defbi = "defbi", endbi = "endbi", setcolor = "setcolor",
        slines = "slines", dispc = "dispc", smpch = "smpch", rmpch = "rmpch", smsc = "smsc",
        rmsc = "rmsc", pctrm = "pctrm", scesc = "scesc", scesa = "scesa", ehhlm = "ehhlm",
        elhlm = "elhlm", elohlm = "elohlm", erhlm = "erhlm", ethlm = "ethlm", evhlm = "evhlm",
        sgr1 = "sgr1", slength = "slength", OTi2 = "OTi2", OTrs = "OTrs", OTnl = "OTnl",
        OTbs = "OTbs", OTko = "OTko", OTma = "OTma", OTG2 = "OTG2", OTG3 = "OTG3", OTG1 = "OTG1",
        OTG4 = "OTG4", OTGR = "OTGR", OTGL = "OTGL", OTGU = "OTGU", OTGD = "OTGD", OTGH = "OTGH",
        OTGV = "OTGV", OTGC = "OTGC", meml = "meml", memu = "memu", box1 = "box1",
    ]
}
