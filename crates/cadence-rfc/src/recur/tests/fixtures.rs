//! Shared rule fixtures for cross-module tests.

/// Valid rules spanning every rule part.
pub const VALID_RULES: &[&str] = &[
    "FREQ=DAILY",
    "FREQ=DAILY;COUNT=10",
    "FREQ=DAILY;INTERVAL=2",
    "FREQ=DAILY;UNTIL=19971224",
    "FREQ=WEEKLY;BYDAY=MO,WE,FR;COUNT=6",
    "FREQ=WEEKLY;INTERVAL=2;BYDAY=TU,SU;WKST=SU",
    "FREQ=MONTHLY;BYDAY=FR;BYMONTHDAY=13",
    "FREQ=MONTHLY;BYDAY=MO,TU,WE,TH,FR;BYSETPOS=-1",
    "FREQ=MONTHLY;INTERVAL=18;BYMONTHDAY=10,11,12,13,14,15",
    "FREQ=YEARLY;BYMONTH=4;BYDAY=-1SU;UNTIL=19730429T070000Z",
    "FREQ=YEARLY;BYWEEKNO=20;BYDAY=MO",
    "FREQ=YEARLY;INTERVAL=3;BYYEARDAY=1,100,200",
    "FREQ=HOURLY;INTERVAL=3;UNTIL=19970902T170000Z",
    "FREQ=MINUTELY;INTERVAL=90;COUNT=4",
    "FREQ=SECONDLY;BYSECOND=0,15,30,45;COUNT=8",
];

/// Rule texts the parser must reject.
pub const INVALID_RULES: &[&str] = &[
    "",
    "COUNT=5",
    "FREQ=SOMETIMES",
    "FREQ=DAILY;COUNT=5;UNTIL=20200101T000000Z",
    "FREQ=DAILY;UNTIL=20200101T000000",
    "FREQ=DAILY;FREQ=WEEKLY",
    "FREQ=DAILY;BYHOUR=24",
    "FREQ=DAILY;BYMONTHDAY=0",
    "FREQ=DAILY;BYBOGUS=1",
    "FREQ=DAILY;INTERVAL=0",
];
