//! Fixture builders producing representative spec-file text.
//!
//! The fixtures mirror the shapes found in the real suite: a solo or
//! multi-symbol testing import, the application-module import, and the
//! old multi-line bootstrap block with or without global middleware.

/// A pre-migration spec file with the solo testing import.
///
/// `with_pipes` adds the global middleware line between application
/// creation and init, the second known bootstrap shape.
#[must_use]
pub fn legacy_spec(with_pipes: bool) -> String {
    let pipes = if with_pipes {
        "    app.useGlobalPipes(new ValidationPipe({ whitelist: true }));\n"
    } else {
        ""
    };
    format!(
        "import {{ Test }} from '@nestjs/testing';\n\
         import {{ INestApplication, ValidationPipe }} from '@nestjs/common';\n\
         import request from 'supertest';\n\
         import {{ AppModule }} from '../../src/app.module';\n\
         \n\
         describe('Courses (e2e)', () => {{\n\
         \x20\x20let app: INestApplication;\n\
         \n\
         \x20\x20beforeAll(async () => {{\n\
         \x20\x20\x20\x20const moduleRef = await Test.createTestingModule({{\n\
         \x20\x20\x20\x20\x20\x20imports: [AppModule],\n\
         \x20\x20\x20\x20}}).compile();\n\
         \x20\x20\x20\x20app = moduleRef.createNestApplication();\n\
         {pipes}\
         \x20\x20\x20\x20await app.init();\n\
         \x20\x20}});\n\
         \n\
         \x20\x20afterAll(async () => {{\n\
         \x20\x20\x20\x20await app.close();\n\
         \x20\x20}});\n\
         \n\
         \x20\x20it('GET /courses returns 200', () => {{\n\
         \x20\x20\x20\x20return request(app.getHttpServer()).get('/courses').expect(200);\n\
         \x20\x20}});\n\
         }});\n"
    )
}

/// A pre-migration spec file whose testing import lists several symbols.
#[must_use]
pub fn legacy_spec_multi_import() -> String {
    legacy_spec(false).replace(
        "import { Test } from '@nestjs/testing';\n\
         import { INestApplication, ValidationPipe } from '@nestjs/common';\n",
        "import { Test, INestApplication } from '@nestjs/testing';\n",
    )
}

/// A spec file that has already been migrated to the shared helper.
#[must_use]
pub fn migrated_spec() -> String {
    "import { INestApplication } from '@nestjs/common';\n\
     import request from 'supertest';\n\
     import { AppModule } from '../../src/app.module';\n\
     import { E2ETestModule } from '../test-helpers/e2e-test-module';\n\
     \n\
     describe('Courses (e2e)', () => {\n\
     \x20\x20let app: INestApplication;\n\
     \n\
     \x20\x20beforeAll(async () => {\n\
     \x20\x20\x20\x20const { app: testApp } = await E2ETestModule.create([AppModule]);\n\
     \x20\x20\x20\x20app = testApp;\n\
     \x20\x20});\n\
     });\n"
        .to_owned()
}
